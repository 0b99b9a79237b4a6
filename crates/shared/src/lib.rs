//! Shared utilities and common types for the work order admin backend.
//!
//! This crate provides functionality used across the other crates:
//! - Offset/limit pagination clamping
//! - Common validation logic

pub mod pagination;
pub mod validation;
