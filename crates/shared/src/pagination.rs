//! Offset/limit pagination utilities.

/// Upper bound applied to any caller-supplied page size.
pub const MAX_LIMIT: i64 = 1000;

/// Page window resolved from `skip`/`limit` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    /// Resolves optional `skip` and `limit` values against a per-endpoint default.
    ///
    /// Negative offsets are treated as 0. Limits are clamped to `0..=MAX_LIMIT`.
    pub fn resolve(skip: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        let offset = skip.unwrap_or(0).max(0);
        let limit = limit.unwrap_or(default_limit).clamp(0, MAX_LIMIT);
        Self { offset, limit }
    }
}
