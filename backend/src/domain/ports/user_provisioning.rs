//! Driving port for account provisioning.
//!
//! Inbound adapters call this port with input that has already passed the
//! validation engine; implementations orchestrate identity derivation and
//! delegate creation to the account store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, UserCreationInput};

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProvisioning: Send + Sync {
    /// Create an account from validated input, deriving any unset identity
    /// fields, and return the store-assigned identifier.
    async fn create(&self, input: UserCreationInput) -> Result<Uuid, Error>;

    /// Minimal creation path for flows that skip profile enrichment; the
    /// login handle doubles as the contact email.
    async fn create_simple(&self, login_handle: &str, password: &str) -> Result<Uuid, Error>;
}

/// Fixture implementation for handler tests.
///
/// Always reports the same identifier without touching any store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserProvisioning;

const FIXTURE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn fixture_id() -> Result<Uuid, Error> {
    // The value is a compile-time constant; surface invalid data as an
    // internal error so automated checks catch accidental regressions.
    Uuid::parse_str(FIXTURE_ID)
        .map_err(|err| Error::internal(format!("invalid fixture account id: {err}")))
}

#[async_trait]
impl UserProvisioning for FixtureUserProvisioning {
    async fn create(&self, _input: UserCreationInput) -> Result<Uuid, Error> {
        fixture_id()
    }

    async fn create_simple(&self, _login_handle: &str, _password: &str) -> Result<Uuid, Error> {
        fixture_id()
    }
}
