//! Common types for all hotel entities

pub mod audit;
pub mod validation;

pub use audit::AuditFields;
