//! Driving port for account search.
//!
//! Inbound adapters call this port with criteria that have already passed
//! the query validator; implementations translate the criteria into a store
//! filter and project the matches.

use async_trait::async_trait;

use crate::domain::{Error, UserSearchCriteria, UserSummary};

/// Domain use-case port for searching accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSearch: Send + Sync {
    /// Return summaries of every account matching the criteria.
    ///
    /// Assumes at least one predicate is present; zero matches is an empty
    /// list, never an error.
    async fn find(&self, criteria: UserSearchCriteria) -> Result<Vec<UserSummary>, Error>;
}

/// Fixture implementation for handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserSearch;

#[async_trait]
impl UserSearch for FixtureUserSearch {
    async fn find(&self, _criteria: UserSearchCriteria) -> Result<Vec<UserSummary>, Error> {
        const FIXTURE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

        // The value is a compile-time constant; surface invalid data as an
        // internal error so automated checks catch accidental regressions.
        let id = uuid::Uuid::parse_str(FIXTURE_ID)
            .map_err(|err| Error::internal(format!("invalid fixture account id: {err}")))?;
        Ok(vec![UserSummary {
            id,
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            middle_name: None,
            phone_number: Some("71234567890".into()),
            email: "ada@example.com".into(),
        }])
    }
}
