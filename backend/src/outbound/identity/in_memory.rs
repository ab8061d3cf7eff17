//! In-memory account store adapter.
//!
//! Default [`AccountStore`] implementation backing the server when no
//! external identity system is wired. It honours the store contract the
//! domain relies on: login-handle uniqueness, conjunctive substring
//! filtering, no-op deletes of missing accounts, and role/policy grant
//! resolution. Credential material is handed over at creation and not
//! retained.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{
    AccountFilter, AccountStore, AccountStoreError, CreateOutcome, NewAccount, StoredAccount,
};

/// Process-local account store.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, StoredAccount>>,
    roles: RwLock<HashMap<Uuid, HashSet<String>>>,
    policy_grants: RwLock<HashMap<Uuid, HashSet<String>>>,
}

impl InMemoryAccountStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a role membership for an account.
    ///
    /// Grant management sits outside the provisioning contract; this mirrors
    /// an administrator acting directly on the identity system.
    pub async fn grant_role(&self, id: Uuid, role: impl Into<String>) {
        self.roles.write().await.entry(id).or_default().insert(role.into());
    }

    /// Record an authorisation policy grant for an account.
    pub async fn grant_policy(&self, id: Uuid, policy_name: impl Into<String>) {
        self.policy_grants
            .write()
            .await
            .entry(id)
            .or_default()
            .insert(policy_name.into());
    }

    fn matches(account: &StoredAccount, filter: &AccountFilter) -> bool {
        if let Some(id) = filter.id
            && account.id != id
        {
            return false;
        }
        let text_predicates = [
            (account.last_name.as_deref(), filter.last_name.as_deref()),
            (account.first_name.as_deref(), filter.first_name.as_deref()),
            (account.middle_name.as_deref(), filter.middle_name.as_deref()),
            (
                account.phone_number.as_deref(),
                filter.phone_number.as_deref(),
            ),
            (Some(account.contact_email.as_str()), filter.email.as_deref()),
        ];
        text_predicates.into_iter().all(|(stored, wanted)| {
            wanted.is_none_or(|needle| stored.is_some_and(|value| value.contains(needle)))
        })
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create_account(
        &self,
        account: NewAccount,
        _password: &str,
    ) -> Result<CreateOutcome, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        // Handles are unique case-insensitively, as identity systems
        // normalise them before comparison.
        let taken = accounts
            .values()
            .any(|existing| existing.login_handle.eq_ignore_ascii_case(&account.login_handle));
        if taken {
            return Ok(CreateOutcome::Rejected {
                reasons: vec![format!(
                    "login handle '{}' is already taken",
                    account.login_handle
                )],
            });
        }

        let id = Uuid::new_v4();
        let NewAccount {
            login_handle,
            contact_email,
            last_name,
            first_name,
            middle_name,
            date_of_birth,
            passport_number,
            place_of_birth,
            phone_number,
            registration_address,
            residential_address,
        } = account;
        accounts.insert(
            id,
            StoredAccount {
                id,
                login_handle,
                contact_email,
                last_name,
                first_name,
                middle_name,
                date_of_birth,
                passport_number,
                place_of_birth,
                phone_number,
                registration_address,
                residential_address,
            },
        );
        Ok(CreateOutcome::Created { id })
    }

    async fn query_accounts(
        &self,
        filter: &AccountFilter,
    ) -> Result<Vec<StoredAccount>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        let mut matches: Vec<StoredAccount> = accounts
            .values()
            .filter(|account| Self::matches(account, filter))
            .cloned()
            .collect();
        // Map iteration order is arbitrary; give callers a stable order.
        matches.sort_by(|a, b| a.login_handle.cmp(&b.login_handle));
        Ok(matches)
    }

    async fn delete_account(&self, id: Uuid) -> Result<(), AccountStoreError> {
        self.accounts.write().await.remove(&id);
        self.roles.write().await.remove(&id);
        self.policy_grants.write().await.remove(&id);
        Ok(())
    }

    async fn login_handle(&self, id: Uuid) -> Result<Option<String>, AccountStoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .get(&id)
            .map(|account| account.login_handle.clone()))
    }

    async fn is_in_role(&self, id: Uuid, role: &str) -> Result<bool, AccountStoreError> {
        if !self.accounts.read().await.contains_key(&id) {
            return Ok(false);
        }
        Ok(self
            .roles
            .read()
            .await
            .get(&id)
            .is_some_and(|granted| granted.contains(role)))
    }

    async fn authorize(&self, id: Uuid, policy_name: &str) -> Result<bool, AccountStoreError> {
        if !self.accounts.read().await.contains_key(&id) {
            return Ok(false);
        }
        Ok(self
            .policy_grants
            .read()
            .await
            .get(&id)
            .is_some_and(|granted| granted.contains(policy_name)))
    }
}
