//! Domain models.

pub mod material;
pub mod technician;
pub mod work_order;

pub use material::Material;
pub use technician::Technician;
pub use work_order::{WorkOrder, WorkOrderSummaryEntry};
