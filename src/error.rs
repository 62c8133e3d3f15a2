//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from store operations
/// - **Lookup Errors**: Customer id or credit code absent
/// - **Business Rule Errors**: First installment date out of range
/// - **Ownership Errors**: Credit code exists but belongs to another customer
///   (deliberately distinct from not-found, so "doesn't exist" and "not
///   yours" stay distinguishable)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Wraps any sqlx::Error via `#[from]`. Unique-constraint violations
    /// (duplicate cpf or email) get their own HTTP mapping; everything else
    /// is an internal error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No customer exists with this id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Customer id {0} not found")]
    CustomerNotFound(i64),

    /// No credit exists with this credit code.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Credit code {0} not found")]
    CreditNotFound(Uuid),

    /// First installment date falls more than three months after today.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("First installment date {0} is more than 3 months from today")]
    InvalidInstallmentDate(NaiveDate),

    /// The credit exists but is owned by a different customer.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Credit code {credit_code} does not belong to customer {customer_id}")]
    OwnershipMismatch { credit_code: Uuid, customer_id: i64 },
}

/// Convert AppError into an HTTP response.
///
/// Handlers return `Result<T, AppError>` and errors become proper HTTP
/// responses automatically.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `CustomerNotFound` / `CreditNotFound` → 404 Not Found
/// - `InvalidInstallmentDate` → 422 Unprocessable Entity
/// - `OwnershipMismatch` → 400 Bad Request
/// - `Database` with unique violation → 409 Conflict
/// - `Database` otherwise → 500 Internal Server Error (hides details)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::CustomerNotFound(_) => {
                (StatusCode::NOT_FOUND, "customer_not_found", self.to_string())
            }
            AppError::CreditNotFound(_) => {
                (StatusCode::NOT_FOUND, "credit_not_found", self.to_string())
            }
            AppError::InvalidInstallmentDate(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_installment_date",
                self.to_string(),
            ),
            AppError::OwnershipMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                "ownership_mismatch",
                self.to_string(),
            ),
            AppError::Database(sqlx::Error::Database(ref db_err))
                if db_err.is_unique_violation() =>
            {
                (
                    StatusCode::CONFLICT,
                    "duplicate_record",
                    "A record with this cpf or email already exists".to_string(),
                )
            }
            AppError::Database(ref err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
