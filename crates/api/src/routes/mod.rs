//! HTTP route handlers.

pub mod admin_work_orders;
pub mod health;
pub mod materials;
pub mod technicians;
pub mod ui;
pub mod work_orders;

/// Treats missing, empty and whitespace-only filter values alike.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
