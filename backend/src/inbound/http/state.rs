//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UserProvisioning, UserSearch};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Account creation use-case.
    pub provisioning: Arc<dyn UserProvisioning>,
    /// Account search use-case.
    pub search: Arc<dyn UserSearch>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{FixtureUserProvisioning, FixtureUserSearch};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureUserProvisioning),
    ///     Arc::new(FixtureUserSearch),
    /// );
    /// let _provisioning = state.provisioning.clone();
    /// ```
    pub fn new(provisioning: Arc<dyn UserProvisioning>, search: Arc<dyn UserSearch>) -> Self {
        Self {
            provisioning,
            search,
        }
    }
}
