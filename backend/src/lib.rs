//! Backend library for the channel-aware user provisioning service.
//!
//! The crate follows a hexagonal layout: `domain` holds the validation
//! engine, identity derivation, services, and ports; `inbound` adapts HTTP
//! requests onto the driving ports; `outbound` implements the driven ports
//! against infrastructure.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped trace identifier.
pub use domain::TraceId;
/// Middleware attaching trace identifiers to requests.
pub use middleware::trace::Trace;
