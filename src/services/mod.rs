//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers. They
//! hold their stores behind trait objects, injected at construction.

pub mod credit_service;
pub mod customer_service;
