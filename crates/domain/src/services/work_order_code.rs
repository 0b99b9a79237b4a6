//! Human-readable work order codes.

/// Prefix shared by every work order code.
pub const WORK_ORDER_CODE_PREFIX: &str = "OT-";

/// Minimum number of digits in the numeric part of a code.
const CODE_MIN_WIDTH: usize = 4;

/// Derives the code for a work order from its surrogate id.
///
/// The id is zero-padded to a minimum width of 4; longer ids keep their
/// natural width (`7` -> `OT-0007`, `123456` -> `OT-123456`).
pub fn work_order_code(id: i64) -> String {
    format!("{WORK_ORDER_CODE_PREFIX}{id:0width$}", width = CODE_MIN_WIDTH)
}
