//! Driven port for the external account store.
//!
//! The store owns account records, assigns identifiers, and is the sole
//! arbiter of uniqueness. This core only constructs creation requests and
//! interprets outcomes; credential handling (hashing, storage) is the
//! store's concern, so the password travels alongside the attributes and is
//! never retained here.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::define_port_error;

define_port_error! {
    /// Infrastructure errors raised by account store adapters.
    pub enum AccountStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "account store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account store query failed: {message}",
    }
}

/// Attributes for a new account record.
///
/// `login_handle` and `contact_email` are always set by the time a request
/// reaches the store; derivation fills them when the caller did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Login handle, unique per store contract.
    pub login_handle: String,
    /// Contact email; derived when the caller supplied none.
    pub contact_email: String,
    /// Family name.
    pub last_name: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Passport number.
    pub passport_number: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Registration address.
    pub registration_address: Option<String>,
    /// Residential address.
    pub residential_address: Option<String>,
}

/// Account record as owned by the external store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    /// Store-assigned unique identifier.
    pub id: Uuid,
    /// Login handle.
    pub login_handle: String,
    /// Contact email.
    pub contact_email: String,
    /// Family name.
    pub last_name: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Passport number.
    pub passport_number: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Registration address.
    pub registration_address: Option<String>,
    /// Residential address.
    pub residential_address: Option<String>,
}

/// Conjunctive partial-match filter over stored accounts.
///
/// The identifier predicate is exact-match; every text predicate narrows by
/// substring containment on the corresponding stored field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountFilter {
    /// Exact-match account identifier.
    pub id: Option<Uuid>,
    /// Family-name substring.
    pub last_name: Option<String>,
    /// Given-name substring.
    pub first_name: Option<String>,
    /// Middle-name substring.
    pub middle_name: Option<String>,
    /// Phone-number substring.
    pub phone_number: Option<String>,
    /// Email substring.
    pub email: Option<String>,
}

/// Outcome of an account creation request.
///
/// A rejection carries the store's reported reasons verbatim; infrastructure
/// failures travel separately as [`AccountStoreError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The account was created under the given identifier.
    Created {
        /// Store-assigned identifier of the new account.
        id: Uuid,
    },
    /// The store refused the request.
    Rejected {
        /// Store-reported reasons, unclassified by this core.
        reasons: Vec<String>,
    },
}

/// Driven port abstracting the external account store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create an account; the store is atomic — either the account exists
    /// afterwards or nothing was written.
    async fn create_account(
        &self,
        account: NewAccount,
        password: &str,
    ) -> Result<CreateOutcome, AccountStoreError>;

    /// Return every account matching the conjunctive filter.
    async fn query_accounts(
        &self,
        filter: &AccountFilter,
    ) -> Result<Vec<StoredAccount>, AccountStoreError>;

    /// Delete an account. Deleting a nonexistent account is a success no-op.
    async fn delete_account(&self, id: Uuid) -> Result<(), AccountStoreError>;

    /// Look up the login handle for an account identifier.
    async fn login_handle(&self, id: Uuid) -> Result<Option<String>, AccountStoreError>;

    /// Whether the account holds the named role.
    async fn is_in_role(&self, id: Uuid, role: &str) -> Result<bool, AccountStoreError>;

    /// Whether the account satisfies the named authorisation policy.
    async fn authorize(&self, id: Uuid, policy_name: &str) -> Result<bool, AccountStoreError>;
}
