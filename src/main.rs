//! Credit Application System - Main Application Entry Point
//!
//! REST API server for the credit-application flow: customer signup and
//! CRUD, credit applications with the three-month first-installment rule,
//! and credit lookups with ownership checks.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Wire PostgreSQL stores into the services
//! 5. Build HTTP router and start serving

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use credit_application_system::{
    AppState, config, db, handlers, router,
    services::{credit_service::CreditService, customer_service::CustomerService},
    stores::{credit_store::PgCreditStore, customer_store::PgCustomerStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging via tracing; RUST_LOG controls the filter (default "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Wire the PostgreSQL stores into the services
    let customers = CustomerService::new(Arc::new(PgCustomerStore::new(pool.clone())));
    let credits = CreditService::new(Arc::new(PgCreditStore::new(pool.clone())), customers.clone());

    let api = router(AppState { customers, credits });

    let app = Router::new()
        // Health stays next to the pool it pings
        .route("/health", get(handlers::health::health_check))
        .with_state(pool)
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
