//! In-memory store implementations for tests.
//!
//! These back the service unit tests and the router integration tests so
//! the business rules can be exercised without a running PostgreSQL.
//!
//! Differences from the real stores: ids are handed out from a counter, and
//! the cpf/email unique constraints and the customer→credit delete cascade
//! are not modelled.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        credit::{Credit, NewCredit},
        customer::{Customer, NewCustomer, UpdateCustomerRequest},
    },
    stores::{credit_store::CreditStore, customer_store::CustomerStore},
};

/// Customer store over a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: Mutex<Inner<Customer>>,
}

/// Credit store over a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryCreditStore {
    inner: Mutex<Inner<Credit>>,
}

#[derive(Debug)]
struct Inner<T> {
    rows: HashMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Inner<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Inner<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        let mut inner = self.inner.lock().expect("customer store mutex poisoned");
        let id = inner.allocate_id();
        let stored = Customer {
            id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            email: customer.email,
            password_hash: customer.password_hash,
            income: customer.income,
            address: customer.address,
            created_at: Utc::now(),
        };
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let inner = self.inner.lock().expect("customer store mutex poisoned");
        Ok(inner.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        patch: UpdateCustomerRequest,
    ) -> Result<Option<Customer>, AppError> {
        let mut inner = self.inner.lock().expect("customer store mutex poisoned");
        let updated = inner.rows.get_mut(&id).map(|customer| {
            customer.first_name = patch.first_name;
            customer.last_name = patch.last_name;
            customer.income = patch.income;
            customer.address.zip_code = patch.zip_code;
            customer.address.street = patch.street;
            customer.clone()
        });
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.lock().expect("customer store mutex poisoned");
        inner.rows.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CreditStore for InMemoryCreditStore {
    async fn insert(&self, credit: NewCredit) -> Result<Credit, AppError> {
        let mut inner = self.inner.lock().expect("credit store mutex poisoned");
        let id = inner.allocate_id();
        let stored = Credit {
            id,
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            day_first_installment: credit.day_first_installment,
            number_of_installments: credit.number_of_installments,
            status: credit.status,
            customer_id: credit.customer_id,
            created_at: Utc::now(),
        };
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>, AppError> {
        let inner = self.inner.lock().expect("credit store mutex poisoned");
        let mut credits: Vec<Credit> = inner
            .rows
            .values()
            .filter(|credit| credit.customer_id == customer_id)
            .cloned()
            .collect();
        credits.sort_by_key(|credit| credit.id);
        Ok(credits)
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>, AppError> {
        let inner = self.inner.lock().expect("credit store mutex poisoned");
        Ok(inner
            .rows
            .values()
            .find(|credit| credit.credit_code == credit_code)
            .cloned())
    }
}
