//! Domain layer for the work order admin backend.
//!
//! This crate contains:
//! - Domain models (Material, Technician, WorkOrder)
//! - Request/response payloads with their wire names
//! - Work order code derivation and admin filter parsing

pub mod models;
pub mod services;
