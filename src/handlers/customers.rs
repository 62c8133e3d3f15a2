//! Customer HTTP handlers.
//!
//! This module implements the customer-related API endpoints:
//! - POST /api/customers - Sign up a new customer
//! - GET /api/customers/{id} - Fetch a customer
//! - PATCH /api/customers/{id} - Update name, income, and address
//! - DELETE /api/customers/{id} - Remove a customer (credits cascade)

use crate::{
    AppState,
    error::AppError,
    models::customer::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Sign up a new customer.
///
/// # Response
///
/// - **201 Created**: the stored customer (password hash never included)
/// - **409 Conflict**: cpf or email already registered
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let customer = state.customers.save(request).await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Fetch a customer by id.
///
/// # Response
///
/// - **200 OK**: the customer
/// - **404 Not Found**: no customer has this id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state.customers.find_by_id(id).await?;

    Ok(Json(customer.into()))
}

/// Update an existing customer's name, income, and address.
///
/// Identity fields (cpf, email, password) cannot be changed here.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state.customers.update(id, request).await?;

    Ok(Json(customer.into()))
}

/// Remove a customer and, through the store cascade, every credit they own.
///
/// # Response
///
/// - **204 No Content**: removed
/// - **404 Not Found**: no customer has this id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.customers.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
