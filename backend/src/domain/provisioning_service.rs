//! Account provisioning domain service.
//!
//! Implements the [`UserProvisioning`] driving port over an
//! [`AccountStore`]. Input reaching this service has already passed the
//! validation engine, so a store rejection here is a processing failure,
//! not a validation failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::domain::ports::{
    AccountStore, AccountStoreError, CreateOutcome, NewAccount, UserProvisioning,
};
use crate::domain::{Error, UserCreationInput, identity};

/// Provisioning service delegating account creation to the store.
#[derive(Clone)]
pub struct UserProvisioningService<S> {
    store: Arc<S>,
}

impl<S> UserProvisioningService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> UserProvisioningService<S>
where
    S: AccountStore,
{
    fn map_store_error(error: AccountStoreError) -> Error {
        match error {
            AccountStoreError::Connection { message } => {
                Error::service_unavailable(format!("account store unavailable: {message}"))
            }
            AccountStoreError::Query { message } => {
                Error::internal(format!("account store error: {message}"))
            }
        }
    }

    fn rejection_error(reasons: Vec<String>) -> Error {
        let joined = reasons.join("; ");
        error!(reasons = %joined, "account store rejected user creation");
        Error::conflict(format!("user creation failed: {joined}")).with_details(json!({
            "reasons": reasons,
            "code": "account_store_rejected",
        }))
    }

    fn assemble(input: &UserCreationInput) -> NewAccount {
        NewAccount {
            login_handle: identity::derive_login_handle(
                input.email.as_deref(),
                input.phone_number.as_deref(),
            ),
            contact_email: identity::derive_contact_email(
                input.email.as_deref(),
                input.phone_number.as_deref(),
            ),
            last_name: input.last_name.clone(),
            first_name: input.first_name.clone(),
            middle_name: input.middle_name.clone(),
            date_of_birth: input.date_of_birth,
            passport_number: input.passport_number.clone(),
            place_of_birth: input.place_of_birth.clone(),
            phone_number: input.phone_number.clone(),
            registration_address: input.registration_address.clone(),
            residential_address: input.residential_address.clone(),
        }
    }

    async fn submit(&self, account: NewAccount, password: &str) -> Result<Uuid, Error> {
        match self
            .store
            .create_account(account, password)
            .await
            .map_err(Self::map_store_error)?
        {
            CreateOutcome::Created { id } => Ok(id),
            CreateOutcome::Rejected { reasons } => Err(Self::rejection_error(reasons)),
        }
    }
}

#[async_trait]
impl<S> UserProvisioning for UserProvisioningService<S>
where
    S: AccountStore,
{
    async fn create(&self, input: UserCreationInput) -> Result<Uuid, Error> {
        let account = Self::assemble(&input);
        self.submit(account, &input.password).await
    }

    async fn create_simple(&self, login_handle: &str, password: &str) -> Result<Uuid, Error> {
        let account = NewAccount {
            login_handle: login_handle.to_owned(),
            contact_email: login_handle.to_owned(),
            last_name: None,
            first_name: None,
            middle_name: None,
            date_of_birth: None,
            passport_number: None,
            place_of_birth: None,
            phone_number: None,
            registration_address: None,
            residential_address: None,
        };
        self.submit(account, password).await
    }
}
