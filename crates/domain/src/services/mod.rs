//! Domain services.
//!
//! Services contain business logic that operates on domain models.

pub mod technician_filter;
pub mod work_order_code;

pub use technician_filter::TechnicianFilter;
pub use work_order_code::{work_order_code, WORK_ORDER_CODE_PREFIX};
