//! Customer persistence: store trait and PostgreSQL implementation.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppError,
    models::customer::{Customer, NewCustomer, UpdateCustomerRequest},
};

/// Persistence seam for customers.
///
/// The credit and customer services talk to this trait only; production
/// wires in [`PgCustomerStore`], tests an in-memory implementation.
///
/// Lookups return `Ok(None)` for absent rows; turning that into a NotFound
/// error is the service's job.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a new customer and return the stored row.
    ///
    /// Duplicate cpf or email surfaces as a database unique violation.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError>;

    /// Fetch a customer by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Apply an update to the customer with this id, returning the updated
    /// row, or `None` if no such customer exists.
    async fn update(
        &self,
        id: i64,
        patch: UpdateCustomerRequest,
    ) -> Result<Option<Customer>, AppError>;

    /// Remove the customer with this id.
    ///
    /// Owned credits are removed by the store as well (cascade).
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// PostgreSQL-backed customer store.
#[derive(Debug, Clone)]
pub struct PgCustomerStore {
    pool: DbPool,
}

impl PgCustomerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (first_name, last_name, cpf, email, password_hash, income, zip_code, street)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, first_name, last_name, cpf, email, password_hash, income, zip_code, street, created_at
            "#,
        )
        .bind(customer.first_name)
        .bind(customer.last_name)
        .bind(customer.cpf)
        .bind(customer.email)
        .bind(customer.password_hash)
        .bind(customer.income)
        .bind(customer.address.zip_code)
        .bind(customer.address.street)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, cpf, email, password_hash, income, zip_code, street, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn update(
        &self,
        id: i64,
        patch: UpdateCustomerRequest,
    ) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET first_name = $1,
                last_name = $2,
                income = $3,
                zip_code = $4,
                street = $5
            WHERE id = $6
            RETURNING id, first_name, last_name, cpf, email, password_hash, income, zip_code, street, created_at
            "#,
        )
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.income)
        .bind(patch.zip_code)
        .bind(patch.street)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // ON DELETE CASCADE on credits.customer_id removes owned credits
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
