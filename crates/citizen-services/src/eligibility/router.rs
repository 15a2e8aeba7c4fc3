use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::domain::{Gender, Occupation, SchemeId, User, UserId};
use super::repository::{RepositoryError, SchemeRepository, UserRepository};
use super::service::{EligibilityService, EligibilityServiceError};
use crate::auth::{bearer_token, AuthError, Authenticator};

/// Shared handler state: the eligibility service plus the session authenticator.
pub struct EligibilityApi<U, S, A> {
    pub service: Arc<EligibilityService<U, S>>,
    pub auth: Arc<A>,
}

impl<U, S, A> Clone for EligibilityApi<U, S, A> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            auth: Arc::clone(&self.auth),
        }
    }
}

/// Router builder exposing citizen, scheme, and eligibility endpoints.
pub fn eligibility_router<U, S, A>(
    service: Arc<EligibilityService<U, S>>,
    auth: Arc<A>,
) -> Router
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    Router::new()
        .route("/api/v1/auth/login", post(login_handler::<U, S, A>))
        .route("/api/v1/auth/logout", post(logout_handler::<U, S, A>))
        .route("/api/v1/users/me", get(profile_handler::<U, S, A>))
        .route(
            "/api/v1/users/me/documents",
            get(documents_handler::<U, S, A>),
        )
        .route("/api/v1/schemes", get(schemes_handler::<U, S, A>))
        .route(
            "/api/v1/schemes/:scheme_id",
            get(scheme_handler::<U, S, A>),
        )
        .route(
            "/api/v1/schemes/:scheme_id/eligibility",
            get(scheme_eligibility_handler::<U, S, A>),
        )
        .route("/api/v1/eligibility", get(ranked_handler::<U, S, A>))
        .route(
            "/api/v1/eligibility/eligible",
            get(eligible_handler::<U, S, A>),
        )
        .route(
            "/api/v1/eligibility/ineligible",
            get(ineligible_handler::<U, S, A>),
        )
        .route(
            "/api/v1/eligibility/preview",
            post(preview_handler::<U, S, A>),
        )
        .with_state(EligibilityApi { service, auth })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub otp: String,
}

/// Anonymous profile for exploring the catalog before signing in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub age: u32,
    pub gender: Gender,
    pub occupation: Occupation,
    pub annual_income: u64,
    pub state: String,
}

impl PreviewRequest {
    fn into_profile(self) -> User {
        User {
            id: UserId("anonymous".to_string()),
            name: String::new(),
            phone: String::new(),
            age: self.age,
            gender: self.gender,
            occupation: self.occupation,
            annual_income: self.annual_income,
            state: self.state.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SchemeQuery {
    #[serde(default)]
    pub category: Option<String>,
}

pub(crate) async fn login_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    // Unknown phones get the same rejection as a wrong OTP.
    let citizen = match api.service.citizen_by_phone(&request.phone) {
        Ok(citizen) => citizen,
        Err(EligibilityServiceError::PhoneNotRegistered) => {
            warn!("sign-in rejected for unregistered phone");
            return unauthorized(AuthError::InvalidOtp);
        }
        Err(error) => return service_error(error),
    };

    match api.auth.login(&citizen, &request.otp) {
        Ok(grant) => {
            info!(user_id = %grant.user_id, "citizen signed in");
            (StatusCode::OK, Json(grant)).into_response()
        }
        Err(error) => {
            warn!(user_id = %citizen.id, %error, "sign-in rejected");
            unauthorized(error)
        }
    }
}

pub(crate) async fn logout_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    let result = bearer_token(authorization(&headers)).and_then(|token| api.auth.logout(token));
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => unauthorized(error),
    }
}

pub(crate) async fn profile_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    let user_id = match authenticate(api.auth.as_ref(), &headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    respond(api.service.citizen(&user_id))
}

pub(crate) async fn documents_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    let user_id = match authenticate(api.auth.as_ref(), &headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    respond(api.service.documents(&user_id))
}

pub(crate) async fn schemes_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    Query(query): Query<SchemeQuery>,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    respond(api.service.schemes(query.category.as_deref()))
}

pub(crate) async fn scheme_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    Path(scheme_id): Path<String>,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    respond(api.service.published_scheme(&SchemeId(scheme_id)))
}

pub(crate) async fn scheme_eligibility_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    Path(scheme_id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    let user_id = match authenticate(api.auth.as_ref(), &headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    respond(api.service.check(&user_id, &SchemeId(scheme_id)))
}

pub(crate) async fn ranked_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    let user_id = match authenticate(api.auth.as_ref(), &headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    respond(api.service.ranked(&user_id))
}

pub(crate) async fn eligible_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    let user_id = match authenticate(api.auth.as_ref(), &headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    respond(api.service.eligible(&user_id))
}

pub(crate) async fn ineligible_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    let user_id = match authenticate(api.auth.as_ref(), &headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    respond(api.service.ineligible(&user_id))
}

pub(crate) async fn preview_handler<U, S, A>(
    State(api): State<EligibilityApi<U, S, A>>,
    Json(request): Json<PreviewRequest>,
) -> Response
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
    A: Authenticator + 'static,
{
    respond(api.service.preview(&request.into_profile()))
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

fn authenticate<A: Authenticator>(auth: &A, headers: &HeaderMap) -> Result<UserId, Response> {
    bearer_token(authorization(headers))
        .and_then(|token| auth.authenticate(token))
        .map_err(unauthorized)
}

fn respond<T: Serialize>(result: Result<T, EligibilityServiceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => service_error(error),
    }
}

fn unauthorized(error: AuthError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
}

fn service_error(error: EligibilityServiceError) -> Response {
    let status = match &error {
        EligibilityServiceError::UserNotFound(_)
        | EligibilityServiceError::PhoneNotRegistered
        | EligibilityServiceError::SchemeNotFound(_) => StatusCode::NOT_FOUND,
        EligibilityServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
