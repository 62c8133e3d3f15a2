//! HTTP request handlers (route handlers).
//!
//! Each handler extracts the request data, delegates to a service, and
//! converts the outcome into a JSON response.

/// Credit application endpoints
pub mod credits;
/// Customer endpoints
pub mod customers;
/// Health check endpoint
pub mod health;
