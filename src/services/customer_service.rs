//! Customer service - signup, lookup, update, and removal.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::{
    error::AppError,
    models::customer::{Address, CreateCustomerRequest, Customer, NewCustomer, UpdateCustomerRequest},
    stores::customer_store::CustomerStore,
};

/// Customer CRUD on top of a [`CustomerStore`].
///
/// Owns no validation beyond what the store's uniqueness constraints
/// enforce; its one transformation is hashing the signup password before it
/// touches the store.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Persist a new customer from a signup request.
    ///
    /// # Errors
    ///
    /// - `Database` (409 via unique violation): cpf or email already taken
    pub async fn save(&self, request: CreateCustomerRequest) -> Result<Customer, AppError> {
        let password_hash = hash_password(&request.password);

        self.store
            .insert(NewCustomer {
                first_name: request.first_name,
                last_name: request.last_name,
                cpf: request.cpf,
                email: request.email,
                password_hash,
                income: request.income,
                address: Address {
                    zip_code: request.zip_code,
                    street: request.street,
                },
            })
            .await
    }

    /// Fetch a customer by id.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound`: no customer has this id
    pub async fn find_by_id(&self, id: i64) -> Result<Customer, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::CustomerNotFound(id))
    }

    /// Update name, income, and address of an existing customer.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound`: no customer has this id
    pub async fn update(
        &self,
        id: i64,
        patch: UpdateCustomerRequest,
    ) -> Result<Customer, AppError> {
        self.store
            .update(id, patch)
            .await?
            .ok_or(AppError::CustomerNotFound(id))
    }

    /// Remove a customer, resolving it first so an absent id surfaces as
    /// NotFound rather than a silent no-op. Owned credits go with it
    /// (cascade at the store).
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let customer = self.find_by_id(id).await?;
        self.store.delete(customer.id).await
    }
}

/// SHA-256 hex digest of a password.
///
/// Only the digest is persisted; the raw password never reaches the store.
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());

    hex::encode(hasher.finalize())
}
