use std::sync::Arc;

use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use crate::auth::SessionAuthenticator;
use crate::catalog::InMemoryCatalog;
use crate::config::AuthConfig;
use crate::eligibility::domain::{
    CitizenDocument, EligibilityCriteria, Gender, Occupation, Scheme, SchemeId, SchemeStatus,
    User, UserId,
};
use crate::eligibility::repository::{RepositoryError, SchemeRepository, UserRepository};
use crate::eligibility::{eligibility_router, EligibilityEngine, EligibilityService};

pub(super) const DEMO_OTP: &str = "123456";

pub(super) fn citizen(
    age: u32,
    gender: Gender,
    occupation: Occupation,
    annual_income: u64,
    state: &str,
) -> User {
    User {
        id: UserId("citizen-test".to_string()),
        name: "Test Citizen".to_string(),
        phone: "9000000000".to_string(),
        age,
        gender,
        occupation,
        annual_income,
        state: state.to_string(),
    }
}

/// 28 year old male student from Delhi earning ₹1,80,000.
pub(super) fn delhi_student() -> User {
    citizen(28, Gender::Male, Occupation::Student, 180_000, "Delhi")
}

/// 31 year old female farmer from Punjab earning ₹1,50,000.
pub(super) fn punjab_farmer() -> User {
    citizen(31, Gender::Female, Occupation::Farmer, 150_000, "Punjab")
}

pub(super) fn scheme(id: &str, criteria: EligibilityCriteria) -> Scheme {
    Scheme {
        id: SchemeId(id.to_string()),
        name: format!("Scheme {id}"),
        description: String::new(),
        category: "general".to_string(),
        ministry: String::new(),
        benefits: String::new(),
        status: SchemeStatus::Active,
        eligibility_criteria: criteria,
    }
}

pub(super) fn pm_kisan() -> Scheme {
    scheme(
        "pm-kisan",
        EligibilityCriteria {
            occupation: vec!["farmer".to_string()],
            max_income: Some(500_000),
            custom_criteria: vec![
                "Must own cultivable agricultural land".to_string(),
                "Land records must be linked with Aadhaar".to_string(),
            ],
            ..EligibilityCriteria::default()
        },
    )
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new()
}

pub(super) fn auth_config() -> AuthConfig {
    AuthConfig {
        demo_otp: DEMO_OTP.to_string(),
        session_ttl_minutes: 30,
    }
}

pub(super) type CatalogService = EligibilityService<InMemoryCatalog, InMemoryCatalog>;

pub(super) fn build_service() -> (CatalogService, Arc<InMemoryCatalog>) {
    let catalog = Arc::new(InMemoryCatalog::seeded());
    let service = EligibilityService::new(catalog.clone(), catalog.clone());
    (service, catalog)
}

pub(super) fn build_router() -> axum::Router {
    let (service, _) = build_service();
    let auth = Arc::new(SessionAuthenticator::new(&auth_config()));
    eligibility_router(Arc::new(service), auth)
}

/// Repository double simulating a storage outage.
pub(super) struct UnavailableRepository;

impl UserRepository for UnavailableRepository {
    fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_phone(&self, _phone: &str) -> Result<Option<User>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn documents_for(&self, _id: &UserId) -> Result<Vec<CitizenDocument>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

impl SchemeRepository for UnavailableRepository {
    fn active(&self) -> Result<Vec<Scheme>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn by_id(&self, _id: &SchemeId) -> Result<Option<Scheme>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn by_category(&self, _category: &str) -> Result<Vec<Scheme>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn send(router: &axum::Router, request: Request<axum::body::Body>) -> Response {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("route executes")
}

pub(super) async fn login(router: &axum::Router, phone: &str) -> String {
    let payload = serde_json::json!({ "phone": phone, "otp": DEMO_OTP });
    let response = send(
        router,
        Request::post("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(payload.to_string()))
            .expect("request builds"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    body.get("token")
        .and_then(Value::as_str)
        .expect("token issued")
        .to_string()
}

pub(super) fn authorized_get(uri: &str, token: &str) -> Request<axum::body::Body> {
    Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .expect("request builds")
}
