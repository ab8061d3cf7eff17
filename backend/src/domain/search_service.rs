//! Account search domain service.
//!
//! Implements the [`UserSearch`] driving port over an [`AccountStore`]:
//! criteria become a conjunctive partial-match filter, matches are projected
//! into [`UserSummary`] values fresh per query.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{AccountFilter, AccountStore, AccountStoreError, StoredAccount, UserSearch};
use crate::domain::{Error, UserSearchCriteria, UserSummary};

/// Search service translating criteria into store queries.
#[derive(Clone)]
pub struct UserSearchService<S> {
    store: Arc<S>,
}

impl<S> UserSearchService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> UserSearchService<S>
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

    fn to_filter(criteria: UserSearchCriteria) -> AccountFilter {
        let UserSearchCriteria {
            user_id,
            last_name,
            first_name,
            middle_name,
            phone_number,
            email,
        } = criteria;
        AccountFilter {
            id: user_id,
            last_name: last_name.filter(|v| !v.is_empty()),
            first_name: first_name.filter(|v| !v.is_empty()),
            middle_name: middle_name.filter(|v| !v.is_empty()),
            phone_number: phone_number.filter(|v| !v.is_empty()),
            email: email.filter(|v| !v.is_empty()),
        }
    }

    fn summarise(account: StoredAccount) -> UserSummary {
        UserSummary {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            middle_name: account.middle_name,
            phone_number: account.phone_number,
            email: account.contact_email,
        }
    }
}

#[async_trait]
impl<S> UserSearch for UserSearchService<S>
where
    S: AccountStore,
{
    async fn find(&self, criteria: UserSearchCriteria) -> Result<Vec<UserSummary>, Error> {
        let filter = Self::to_filter(criteria);
        let accounts = self
            .store
            .query_accounts(&filter)
            .await
            .map_err(Self::map_store_error)?;
        Ok(accounts.into_iter().map(Self::summarise).collect())
    }
}
