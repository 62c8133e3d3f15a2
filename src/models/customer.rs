//! Customer data models and API request/response types.
//!
//! This module defines:
//! - `Customer`: Database entity representing a customer, with an embedded `Address`
//! - `CreateCustomerRequest` / `UpdateCustomerRequest`: Request bodies
//! - `CustomerResponse`: Response body returned to clients (never exposes the password hash)

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embedded address value object.
///
/// Stored as flat `zip_code` / `street` columns on the `customers` table and
/// owned by exactly one customer.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

/// Represents a customer record from the database.
///
/// # Database Table
///
/// Maps to the `customers` table. `cpf` (tax id) and `email` are unique
/// system-wide; the UNIQUE constraints on the table enforce that, not
/// application logic.
///
/// # Money Storage
///
/// `income` is a `NUMERIC(12, 2)` column mapped to `BigDecimal`, so domain
/// amounts like `1000.00` survive without floating-point drift.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Customer {
    /// Unique identifier for this customer
    pub id: i64,

    pub first_name: String,
    pub last_name: String,

    /// Tax id, unique system-wide
    pub cpf: String,

    /// Email, unique system-wide
    pub email: String,

    /// SHA-256 hex digest of the password submitted at signup
    ///
    /// Only the digest is ever stored or compared; the raw password is
    /// dropped after hashing.
    pub password_hash: String,

    /// Declared monthly income
    pub income: BigDecimal,

    /// Embedded address (flat columns on the same row)
    #[sqlx(flatten)]
    pub address: Address,

    /// Timestamp when the customer signed up
    pub created_at: DateTime<Utc>,
}

/// Column values for a customer about to be inserted.
///
/// Carries the already-hashed password; ids and timestamps are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub password_hash: String,
    pub income: BigDecimal,
    pub address: Address,
}

/// Request body for signing up a new customer.
///
/// # JSON Example
///
/// ```json
/// {
///   "firstName": "Amanda",
///   "lastName": "Queiroz",
///   "cpf": "28475934625",
///   "email": "amanda@example.com",
///   "password": "12345",
///   "income": 1000,
///   "zipCode": "12345",
///   "street": "Rua da Amanda"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,

    /// Raw password; hashed by the customer service before persistence
    pub password: String,

    pub income: BigDecimal,
    pub zip_code: String,
    pub street: String,
}

/// Request body for updating an existing customer.
///
/// Identity fields (cpf, email, password) are not updatable through this
/// endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub income: BigDecimal,
    pub zip_code: String,
    pub street: String,
}

/// Response body for customer endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "firstName": "Amanda",
///   "lastName": "Queiroz",
///   "cpf": "28475934625",
///   "email": "amanda@example.com",
///   "income": "1000.00",
///   "zipCode": "12345",
///   "street": "Rua da Amanda"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: BigDecimal,
    pub zip_code: String,
    pub street: String,
}

/// Convert a database Customer into an API CustomerResponse.
///
/// Drops the password hash and creation timestamp.
impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            email: customer.email,
            income: customer.income,
            zip_code: customer.address.zip_code,
            street: customer.address.street,
        }
    }
}
