//! Domain primitives, ports, and services.
//!
//! Purpose: Define the channel-aware validation engine, identity derivation,
//! and the provisioning/search services, together with the ports they consume.
//! Keep types immutable and document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - Channel (alias to `channel::Channel`) — originating client category.
//! - Validation entry points (`validate_creation`, `validate_search`).
//! - `UserProvisioningService` / `UserSearchService` — port implementations
//!   over an [`ports::AccountStore`].

pub mod channel;
pub mod error;
pub mod identity;
pub mod policy;
pub mod ports;
pub mod provisioning_service;
pub mod search_service;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::channel::Channel;
pub use self::error::{Error, ErrorCode};
pub use self::policy::{FieldPolicy, ProfileField, policy_for};
pub use self::provisioning_service::UserProvisioningService;
pub use self::search_service::UserSearchService;
pub use self::trace_id::TraceId;
pub use self::user::{UserCreationInput, UserSearchCriteria, UserSummary};
pub use self::validation::{Violation, validate_creation, validate_search};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such account"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
