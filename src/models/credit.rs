//! Credit data models and API request/response types.
//!
//! This module defines:
//! - `Credit`: Database entity representing a credit application
//! - `CreditStatus`: Lifecycle status enum
//! - `CreateCreditRequest`: Request body for applying for credit
//! - `CreditResponse` / `CreditSummary`: Response bodies returned to clients

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::customer::Customer;

/// Lifecycle status of a credit application.
///
/// Maps to the `credit_status` Postgres enum. Applications are created as
/// `InProgress`; no operation currently advances them to `Approved` or
/// `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "credit_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    InProgress,
    Approved,
    Rejected,
}

/// Represents a credit record from the database.
///
/// # Database Table
///
/// Maps to the `credits` table. Each credit:
/// - Belongs to exactly one customer (via `customer_id`, FK with cascade delete)
/// - Carries a globally unique `credit_code` (UUID v4), the opaque identifier
///   clients use to look it up; immutable after creation
/// - Stores its value as `NUMERIC` (never floats)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credit {
    /// Internal numeric identifier
    pub id: i64,

    /// Opaque external identifier, unique across all credits
    pub credit_code: Uuid,

    /// Requested credit amount
    pub credit_value: BigDecimal,

    /// Date the first installment is due
    ///
    /// Must fall within three months of the application date; enforced by
    /// the credit service before insertion.
    pub day_first_installment: NaiveDate,

    pub number_of_installments: i32,

    /// Always `InProgress` at creation
    pub status: CreditStatus,

    /// Foreign key to the owning customer
    pub customer_id: i64,

    /// Timestamp when the application was received
    pub created_at: DateTime<Utc>,
}

/// Column values for a credit about to be inserted.
///
/// The credit code and status are decided by the credit service; id and
/// timestamp by the store.
#[derive(Debug, Clone)]
pub struct NewCredit {
    pub credit_code: Uuid,
    pub credit_value: BigDecimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    pub customer_id: i64,
}

/// Request body for applying for credit.
///
/// # JSON Example
///
/// ```json
/// {
///   "creditValue": 1000,
///   "dayFirstInstallment": "2026-09-30",
///   "numberOfInstallments": 5,
///   "customerId": 1
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditRequest {
    pub credit_value: BigDecimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,

    /// Id of the customer applying for this credit
    pub customer_id: i64,
}

/// Query parameters carrying the requesting customer's id.
///
/// Used by `GET /api/credits?customerId=` and
/// `GET /api/credits/{creditCode}?customerId=`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdQuery {
    pub customer_id: i64,
}

/// Full credit view, returned when creating a credit or looking one up by
/// its code. Echoes the owning customer's email and income.
///
/// # JSON Example
///
/// ```json
/// {
///   "creditCode": "550e8400-e29b-41d4-a716-446655440000",
///   "creditValue": "1000",
///   "numberOfInstallments": 5,
///   "status": "IN_PROGRESS",
///   "emailCustomer": "amanda@example.com",
///   "incomeCustomer": "1000"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditResponse {
    pub credit_code: Uuid,
    pub credit_value: BigDecimal,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    pub email_customer: String,
    pub income_customer: BigDecimal,
}

/// Build the full view from a credit and its resolved owner.
///
/// Internal fields (numeric ids, timestamps, installment date) stay out of
/// the payload.
impl From<(Credit, Customer)> for CreditResponse {
    fn from((credit, customer): (Credit, Customer)) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
            status: credit.status,
            email_customer: customer.email,
            income_customer: customer.income,
        }
    }
}

/// Slim credit view used when listing a customer's credits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub credit_code: Uuid,
    pub credit_value: BigDecimal,
    pub number_of_installments: i32,
}

impl From<Credit> for CreditSummary {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}
