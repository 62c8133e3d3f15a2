//! Persistence layer: store traits and their implementations.
//!
//! Services depend on the traits only; `main` wires in the PostgreSQL
//! implementations, tests the in-memory ones.

pub mod credit_store;
pub mod customer_store;

/// In-memory stores for tests
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
