//! Users API handlers.
//!
//! ```text
//! POST /api/v1/users {"password":"Abcdef1!","firstName":"Ada","email":"ada@example.com"}
//! GET /api/v1/users?firstName=Jo
//! ```
//!
//! The originating channel is signalled via the `x-Device` header; it selects
//! which field policy the creation payload is validated against.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::validation::DEVICE_HEADER;
use crate::domain::{
    Channel, Error, UserCreationInput, UserSearchCriteria, UserSummary, Violation,
    validate_creation, validate_search,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Response body for a successful account creation.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUserResponse {
    /// Store-assigned identifier of the new account.
    pub id: Uuid,
}

/// Read the trimmed channel signal from the request headers.
fn device_signal(request: &HttpRequest) -> Option<String> {
    request
        .headers()
        .get(DEVICE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_owned())
}

/// Wrap an exhaustive violation list into one invalid-request error.
fn violations_error(violations: &[Violation]) -> Error {
    Error::invalid_request("request validation failed").with_details(json!({
        "violations": violations,
        "code": "validation_failed",
    }))
}

/// Create a user account.
///
/// The `x-Device` header selects the field policy (`mail`, `mobile`, or
/// `web`); validation reports every violated rule before any store
/// interaction happens.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserCreationInput,
    params(
        ("x-Device" = Option<String>, Header, description = "Originating channel: mail, mobile, or web")
    ),
    responses(
        (status = 201, description = "Account created", body = CreatedUserResponse),
        (status = 400, description = "Validation failed", body = Error),
        (status = 409, description = "Account store rejected the request", body = Error),
        (status = 503, description = "Account store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<UserCreationInput>,
) -> ApiResult<HttpResponse> {
    let input = payload.into_inner();
    let channel = Channel::from_signal(device_signal(&request).as_deref());

    let violations = validate_creation(channel, &input);
    if !violations.is_empty() {
        return Err(violations_error(&violations));
    }

    let id = state.provisioning.create(input).await?;
    Ok(HttpResponse::Created().json(CreatedUserResponse { id }))
}

/// Search user accounts.
///
/// All supplied predicates narrow the result conjunctively; the identifier
/// predicate is exact-match, text predicates match by substring.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(UserSearchCriteria),
    responses(
        (status = 200, description = "Matching accounts", body = [UserSummary]),
        (status = 400, description = "Validation failed", body = Error),
        (status = 503, description = "Account store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "searchUsers"
)]
#[get("/users")]
pub async fn search_users(
    state: web::Data<HttpState>,
    query: web::Query<UserSearchCriteria>,
) -> ApiResult<web::Json<Vec<UserSummary>>> {
    let criteria = query.into_inner();

    let violations = validate_search(&criteria);
    if !violations.is_empty() {
        return Err(violations_error(&violations));
    }

    let summaries = state.search.find(criteria).await?;
    Ok(web::Json(summaries))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{FixtureUserProvisioning, FixtureUserSearch};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;
    use std::sync::Arc;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(
            Arc::new(FixtureUserProvisioning),
            Arc::new(FixtureUserSearch),
        );
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(create_user)
                .service(search_users),
        )
    }

    fn violation_fields(body: &Value) -> Vec<String> {
        body.get("details")
            .and_then(|details| details.get("violations"))
            .and_then(Value::as_array)
            .expect("violations array")
            .iter()
            .map(|violation| {
                violation
                    .get("field")
                    .and_then(Value::as_str)
                    .expect("violation field")
                    .to_owned()
            })
            .collect()
    }

    #[actix_web::test]
    async fn create_user_returns_created_for_valid_mail_payload() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header((DEVICE_HEADER, "mail"))
            .set_json(json!({
                "password": "Abcdef1!",
                "firstName": "Ada",
                "email": "ada@example.com",
            }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert!(body.get("id").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn create_user_without_channel_reports_channel_violation() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "password": "Abcdef1!" }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        assert_eq!(violation_fields(&body), vec!["firstName"]);
    }

    #[actix_web::test]
    async fn create_user_reports_extra_field_for_mobile() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header((DEVICE_HEADER, "mobile"))
            .set_json(json!({
                "password": "Abcdef1!",
                "phoneNumber": "71234567890",
                "email": "x@y.com",
            }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(violation_fields(&body), vec!["email"]);
    }

    #[actix_web::test]
    async fn search_users_returns_summaries_for_valid_criteria() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/users?firstName=Ada")
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        let first = &body.as_array().expect("array")[0];
        assert_eq!(first.get("firstName").and_then(Value::as_str), Some("Ada"));
        // camelCase wire names only.
        assert!(first.get("first_name").is_none());
    }

    #[actix_web::test]
    async fn search_users_rejects_empty_criteria() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(violation_fields(&body), vec!["criteria"]);
    }
}
