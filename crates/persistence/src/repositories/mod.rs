//! Repository implementations for database operations.

pub mod material;
pub mod technician;
pub mod work_order;

pub use material::MaterialRepository;
pub use technician::TechnicianRepository;
pub use work_order::{NewWorkOrder, PendingFilter, WorkOrderRepository};

/// Escapes `LIKE`/`ILIKE` wildcards so user input matches literally.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
