//! Credit HTTP handlers.
//!
//! This module implements the credit-related API endpoints:
//! - POST /api/credits - Apply for credit
//! - GET /api/credits?customerId= - List a customer's credits
//! - GET /api/credits/{creditCode}?customerId= - Look up one credit with
//!   an ownership check

use crate::{
    AppState,
    error::AppError,
    models::credit::{CreateCreditRequest, CreditResponse, CreditSummary, CustomerIdQuery},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Apply for credit.
///
/// # Request Body
///
/// ```json
/// {
///   "creditValue": 1000,
///   "dayFirstInstallment": "2026-09-30",
///   "numberOfInstallments": 5,
///   "customerId": 1
/// }
/// ```
///
/// # Response
///
/// - **201 Created**: the stored credit with its generated code, status
///   `IN_PROGRESS`, and the owner's email/income echoed back
/// - **404 Not Found**: no customer has the given id
/// - **422 Unprocessable Entity**: first installment more than three months out
pub async fn create_credit(
    State(state): State<AppState>,
    Json(request): Json<CreateCreditRequest>,
) -> Result<(StatusCode, Json<CreditResponse>), AppError> {
    let (credit, customer) = state.credits.save(request).await?;

    Ok((StatusCode::CREATED, Json((credit, customer).into())))
}

/// List the credits owned by a customer.
///
/// # Endpoint
///
/// `GET /api/credits?customerId=1`
///
/// Returns slim summaries (code, value, installments); an unknown customer
/// id simply yields an empty list.
pub async fn list_credits(
    State(state): State<AppState>,
    Query(query): Query<CustomerIdQuery>,
) -> Result<Json<Vec<CreditSummary>>, AppError> {
    let credits = state.credits.find_all_by_customer(query.customer_id).await?;

    let summaries: Vec<CreditSummary> = credits.into_iter().map(Into::into).collect();

    Ok(Json(summaries))
}

/// Look up one credit by its code on behalf of a customer.
///
/// # Endpoint
///
/// `GET /api/credits/{creditCode}?customerId=1`
///
/// # Response
///
/// - **200 OK**: the full credit view
/// - **404 Not Found**: no credit has this code
/// - **400 Bad Request**: the credit belongs to a different customer
pub async fn get_credit(
    State(state): State<AppState>,
    Path(credit_code): Path<Uuid>,
    Query(query): Query<CustomerIdQuery>,
) -> Result<Json<CreditResponse>, AppError> {
    let (credit, customer) = state
        .credits
        .find_by_credit_code_and_customer_id(query.customer_id, credit_code)
        .await?;

    Ok(Json((credit, customer).into()))
}
