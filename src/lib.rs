//! Credit Application System
//!
//! REST backend for a small credit-application flow: customers sign up,
//! apply for credit, and query their applications. An application is
//! accepted when its first installment falls within three months of the
//! request date; credits are looked up by an opaque credit code with an
//! ownership check against the requesting customer.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries, embedded migrations)
//! - **Persistence seam**: `CustomerStore` / `CreditStore` traits; services
//!   receive an implementation at construction
//! - **Format**: JSON requests/responses, camelCase fields

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod stores;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::services::{credit_service::CreditService, customer_service::CustomerService};

/// Shared application state handed to every API handler.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub credits: CreditService,
}

/// Build the API router.
///
/// Takes the state explicitly so production can wire in the PostgreSQL
/// stores and tests the in-memory ones. The health route lives in `main`,
/// next to the pool it pings.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Customer routes
        .route("/api/customers", post(handlers::customers::create_customer))
        .route("/api/customers/{id}", get(handlers::customers::get_customer))
        .route(
            "/api/customers/{id}",
            patch(handlers::customers::update_customer),
        )
        .route(
            "/api/customers/{id}",
            delete(handlers::customers::delete_customer),
        )
        // Credit routes
        .route("/api/credits", post(handlers::credits::create_credit))
        .route("/api/credits", get(handlers::credits::list_credits))
        .route("/api/credits/{creditCode}", get(handlers::credits::get_credit))
        .with_state(state)
}
