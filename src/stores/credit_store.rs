//! Credit persistence: store trait and PostgreSQL implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::credit::{Credit, NewCredit},
};

/// Persistence seam for credit applications.
#[async_trait]
pub trait CreditStore: Send + Sync {
    /// Insert a new credit and return the stored row.
    async fn insert(&self, credit: NewCredit) -> Result<Credit, AppError>;

    /// All credits owned by this customer, oldest first. Empty if none.
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>, AppError>;

    /// Fetch a credit by its opaque credit code.
    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>, AppError>;
}

/// PostgreSQL-backed credit store.
#[derive(Debug, Clone)]
pub struct PgCreditStore {
    pool: DbPool,
}

impl PgCreditStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditStore for PgCreditStore {
    async fn insert(&self, credit: NewCredit) -> Result<Credit, AppError> {
        let credit = sqlx::query_as::<_, Credit>(
            r#"
            INSERT INTO credits (credit_code, credit_value, day_first_installment, number_of_installments, status, customer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, credit_code, credit_value, day_first_installment, number_of_installments, status, customer_id, created_at
            "#,
        )
        .bind(credit.credit_code)
        .bind(credit.credit_value)
        .bind(credit.day_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.status)
        .bind(credit.customer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(credit)
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>, AppError> {
        let credits = sqlx::query_as::<_, Credit>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment, number_of_installments, status, customer_id, created_at
            FROM credits
            WHERE customer_id = $1
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(credits)
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>, AppError> {
        let credit = sqlx::query_as::<_, Credit>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment, number_of_installments, status, customer_id, created_at
            FROM credits
            WHERE credit_code = $1
            "#,
        )
        .bind(credit_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credit)
    }
}
