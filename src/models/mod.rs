//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response types exposed over the REST API.

/// Credit application model
pub mod credit;
/// Customer model with embedded address
pub mod customer;
