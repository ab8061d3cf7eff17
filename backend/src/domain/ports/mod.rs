//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_store;
mod user_provisioning;
mod user_search;

#[cfg(test)]
pub use account_store::MockAccountStore;
pub use account_store::{
    AccountFilter, AccountStore, AccountStoreError, CreateOutcome, NewAccount, StoredAccount,
};
#[cfg(test)]
pub use user_provisioning::MockUserProvisioning;
pub use user_provisioning::{FixtureUserProvisioning, UserProvisioning};
#[cfg(test)]
pub use user_search::MockUserSearch;
pub use user_search::{FixtureUserSearch, UserSearch};
