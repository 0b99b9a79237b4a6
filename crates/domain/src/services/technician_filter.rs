//! Technician filter used by the pending work order listing.

/// How the `tec` query parameter restricts pending work orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechnicianFilter {
    /// Exact technician id match.
    Id(i64),
    /// Case-insensitive substring match on the technician name.
    NameContains(String),
}

impl TechnicianFilter {
    /// Parses a raw filter value.
    ///
    /// Values that parse as an integer select by id; anything else is a name
    /// fragment. Blank input means no filter.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i64>() {
            Ok(id) => Some(TechnicianFilter::Id(id)),
            Err(_) => Some(TechnicianFilter::NameContains(raw.to_string())),
        }
    }
}
