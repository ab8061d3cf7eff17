//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the users endpoints and health probes from the inbound layer
//! - **Schemas**: the request/response payloads and the error envelope
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, UserCreationInput, UserSearchCriteria, UserSummary};
use crate::inbound::http::users::CreatedUserResponse;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User provisioning API",
        description = "Channel-aware user provisioning and search."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::search_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserCreationInput,
        UserSearchCriteria,
        UserSummary,
        CreatedUserResponse,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "Account provisioning and search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
