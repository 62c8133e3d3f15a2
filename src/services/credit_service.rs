//! Credit service - Core business logic for credit applications.
//!
//! This service handles:
//! - The three-month first-installment eligibility rule
//! - Credit code generation
//! - Ownership enforcement on credit lookups
//! - Aggregating a customer's credits
//!
//! Owner resolution goes through [`CustomerService`], so an application for
//! an unknown customer fails before anything is persisted.

use std::sync::Arc;

use chrono::{Months, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        credit::{CreateCreditRequest, Credit, CreditStatus, NewCredit},
        customer::Customer,
    },
    services::customer_service::CustomerService,
    stores::credit_store::CreditStore,
};

/// The first installment may be due at most this many months after the
/// application date.
pub const MAX_FIRST_INSTALLMENT_MONTHS: u32 = 3;

/// Credit application logic on top of a [`CreditStore`].
#[derive(Clone)]
pub struct CreditService {
    store: Arc<dyn CreditStore>,
    customers: CustomerService,
}

impl CreditService {
    pub fn new(store: Arc<dyn CreditStore>, customers: CustomerService) -> Self {
        Self { store, customers }
    }

    /// Accept a credit application.
    ///
    /// # Process
    ///
    /// 1. Resolve the owning customer from the id in the request
    /// 2. Check the first-installment date against the three-month rule
    /// 3. Generate a fresh credit code (UUID v4)
    /// 4. Persist with status `IN_PROGRESS`
    ///
    /// Returns the stored credit together with its resolved owner.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound`: no customer has the requested id
    /// - `InvalidInstallmentDate`: first installment more than three months out
    pub async fn save(&self, request: CreateCreditRequest) -> Result<(Credit, Customer), AppError> {
        let customer = self.customers.find_by_id(request.customer_id).await?;

        validate_first_installment(request.day_first_installment, Utc::now().date_naive())?;

        let credit = self
            .store
            .insert(NewCredit {
                credit_code: Uuid::new_v4(),
                credit_value: request.credit_value,
                day_first_installment: request.day_first_installment,
                number_of_installments: request.number_of_installments,
                status: CreditStatus::InProgress,
                customer_id: customer.id,
            })
            .await?;

        tracing::info!(
            credit_code = %credit.credit_code,
            customer_id = customer.id,
            "credit application accepted"
        );

        Ok((credit, customer))
    }

    /// All credits owned by this customer. Empty if none.
    pub async fn find_all_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>, AppError> {
        self.store.find_all_by_customer_id(customer_id).await
    }

    /// Look a credit up by its code on behalf of a customer.
    ///
    /// # Errors
    ///
    /// - `CreditNotFound`: no credit has this code
    /// - `OwnershipMismatch`: the credit exists but belongs to another
    ///   customer. Kept distinct from NotFound so "doesn't exist" and "not
    ///   yours" stay distinguishable.
    pub async fn find_by_credit_code_and_customer_id(
        &self,
        customer_id: i64,
        credit_code: Uuid,
    ) -> Result<(Credit, Customer), AppError> {
        let credit = self
            .store
            .find_by_credit_code(credit_code)
            .await?
            .ok_or(AppError::CreditNotFound(credit_code))?;

        if credit.customer_id != customer_id {
            return Err(AppError::OwnershipMismatch {
                credit_code,
                customer_id,
            });
        }

        let customer = self.customers.find_by_id(customer_id).await?;

        Ok((credit, customer))
    }
}

/// The eligibility rule: the first installment must be due within
/// [`MAX_FIRST_INSTALLMENT_MONTHS`] of `today`, boundary inclusive.
fn validate_first_installment(
    day_first_installment: NaiveDate,
    today: NaiveDate,
) -> Result<(), AppError> {
    let limit = today + Months::new(MAX_FIRST_INSTALLMENT_MONTHS);

    if day_first_installment > limit {
        return Err(AppError::InvalidInstallmentDate(day_first_installment));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::customer::CreateCustomerRequest,
        stores::memory::{InMemoryCreditStore, InMemoryCustomerStore},
    };
    use bigdecimal::BigDecimal;
    use chrono::Days;

    fn services() -> (CreditService, CustomerService) {
        let customers = CustomerService::new(Arc::new(InMemoryCustomerStore::default()));
        let credits = CreditService::new(Arc::new(InMemoryCreditStore::default()), customers.clone());
        (credits, customers)
    }

    async fn stored_customer(customers: &CustomerService, email: &str) -> Customer {
        customers
            .save(CreateCustomerRequest {
                first_name: "Amanda".to_string(),
                last_name: "Queiroz".to_string(),
                cpf: "28475934625".to_string(),
                email: email.to_string(),
                password: "12345".to_string(),
                income: BigDecimal::from(1000),
                zip_code: "12345".to_string(),
                street: "Rua da Amanda".to_string(),
            })
            .await
            .unwrap()
    }

    fn application(customer_id: i64, day_first_installment: NaiveDate) -> CreateCreditRequest {
        CreateCreditRequest {
            credit_value: BigDecimal::from(1000),
            day_first_installment,
            number_of_installments: 5,
            customer_id,
        }
    }

    #[tokio::test]
    async fn save_persists_credit_with_generated_code_and_in_progress_status() {
        let (credits, customers) = services();
        let customer = stored_customer(&customers, "amanda@example.com").await;
        let one_month_out = Utc::now().date_naive() + Months::new(1);

        let (credit, owner) = credits
            .save(application(customer.id, one_month_out))
            .await
            .unwrap();

        assert_eq!(credit.status, CreditStatus::InProgress);
        assert!(!credit.credit_code.is_nil());
        assert_eq!(credit.customer_id, customer.id);
        assert_eq!(owner.email, "amanda@example.com");
    }

    #[tokio::test]
    async fn save_rejects_first_installment_beyond_three_months() {
        let (credits, customers) = services();
        let customer = stored_customer(&customers, "amanda@example.com").await;
        let four_months_out = Utc::now().date_naive() + Months::new(4);

        let err = credits
            .save(application(customer.id, four_months_out))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInstallmentDate(_)));
    }

    #[tokio::test]
    async fn save_fails_for_unknown_customer() {
        let (credits, _) = services();
        let one_month_out = Utc::now().date_naive() + Months::new(1);

        let err = credits.save(application(99, one_month_out)).await.unwrap_err();

        assert!(matches!(err, AppError::CustomerNotFound(99)));
    }

    #[tokio::test]
    async fn find_all_by_customer_returns_only_that_customers_credits() {
        let (credits, customers) = services();
        let amanda = stored_customer(&customers, "amanda@example.com").await;
        let camila = stored_customer(&customers, "camila@example.com").await;
        let one_month_out = Utc::now().date_naive() + Months::new(1);

        credits.save(application(amanda.id, one_month_out)).await.unwrap();
        credits.save(application(amanda.id, one_month_out)).await.unwrap();
        credits.save(application(camila.id, one_month_out)).await.unwrap();

        let amandas = credits.find_all_by_customer(amanda.id).await.unwrap();
        assert_eq!(amandas.len(), 2);
        assert!(amandas.iter().all(|credit| credit.customer_id == amanda.id));

        let nobody = credits.find_all_by_customer(999).await.unwrap();
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn find_by_credit_code_fails_for_unknown_code() {
        let (credits, _) = services();
        let code = Uuid::new_v4();

        let err = credits
            .find_by_credit_code_and_customer_id(1, code)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CreditNotFound(c) if c == code));
    }

    #[tokio::test]
    async fn find_by_credit_code_fails_for_wrong_owner() {
        let (credits, customers) = services();
        let amanda = stored_customer(&customers, "amanda@example.com").await;
        let camila = stored_customer(&customers, "camila@example.com").await;
        let one_month_out = Utc::now().date_naive() + Months::new(1);

        let (credit, _) = credits.save(application(amanda.id, one_month_out)).await.unwrap();

        let err = credits
            .find_by_credit_code_and_customer_id(camila.id, credit.credit_code)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::OwnershipMismatch { .. }));
    }

    #[tokio::test]
    async fn find_by_credit_code_returns_credit_for_its_owner() {
        let (credits, customers) = services();
        let amanda = stored_customer(&customers, "amanda@example.com").await;
        let one_month_out = Utc::now().date_naive() + Months::new(1);

        let (stored, _) = credits.save(application(amanda.id, one_month_out)).await.unwrap();

        let (found, owner) = credits
            .find_by_credit_code_and_customer_id(amanda.id, stored.credit_code)
            .await
            .unwrap();

        assert_eq!(found.id, stored.id);
        assert_eq!(owner.id, amanda.id);
    }

    #[test]
    fn installment_date_rule_boundaries() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let limit = NaiveDate::from_ymd_opt(2026, 11, 30).unwrap();

        // exactly on the limit is accepted
        assert!(validate_first_installment(limit, today).is_ok());
        // one day past the limit is rejected
        assert!(validate_first_installment(limit + Days::new(1), today).is_err());
        // near dates (and even past dates) are accepted; the rule only caps
        // how far out the first installment may be
        assert!(validate_first_installment(today, today).is_ok());
        assert!(validate_first_installment(today - Days::new(10), today).is_ok());
    }
}
