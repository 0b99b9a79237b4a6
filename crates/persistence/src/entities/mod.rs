//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod material;
pub mod technician;
pub mod work_order;

pub use material::MaterialEntity;
pub use technician::TechnicianEntity;
pub use work_order::{WorkOrderEntity, WorkOrderSummaryEntity};
