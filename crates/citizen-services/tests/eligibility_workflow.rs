//! End-to-end scenarios for the eligibility workflow.
//!
//! Catalogs are assembled from JSON and CSV exactly as an operator would supply them, then
//! exercised through the public service facade and the HTTP router.

mod common {
    use std::sync::Arc;

    use citizen_services::auth::SessionAuthenticator;
    use citizen_services::catalog::{InMemoryCatalog, RosterImporter};
    use citizen_services::config::AuthConfig;
    use citizen_services::eligibility::{eligibility_router, EligibilityService};

    pub(super) const OTP: &str = "424242";

    pub(super) const SCHEMES_JSON: &str = r#"[
        {
            "id": "kisan-credit",
            "name": "Kisan Credit Card",
            "category": "agriculture",
            "status": "active",
            "eligibilityCriteria": {
                "minAge": 18,
                "maxAge": 75,
                "occupation": ["farmer"],
                "customCriteria": ["Cultivator, tenant farmer, or sharecropper"]
            }
        },
        {
            "id": "skill-india",
            "name": "PM Kaushal Vikas Yojana",
            "category": "employment",
            "status": "active",
            "eligibilityCriteria": {
                "minAge": 15,
                "maxAge": 45,
                "occupation": ["unemployed", "student"]
            }
        },
        {
            "id": "kerala-fishers",
            "name": "Matsyafed Fishers Relief",
            "category": "livelihood",
            "status": "active",
            "eligibilityCriteria": {
                "occupation": ["other"],
                "state": ["Kerala"],
                "maxIncome": 200000
            }
        },
        {
            "id": "legacy-grant",
            "name": "Discontinued Grant",
            "category": "housing",
            "status": "inactive",
            "eligibilityCriteria": {}
        }
    ]"#;

    pub(super) const ROSTER_CSV: &str = "\
id,name,phone,age,gender,occupation,annual_income,state
c-100, Lakshmi Nair ,9400000001,38,Female,Other,120000,Kerala
c-200,Arjun Singh,9400000002,22,male,Student,90000,Rajasthan
c-300,Meena Devi,,52,FEMALE,farmer,240000,Bihar
";

    pub(super) fn catalog() -> InMemoryCatalog {
        let users = RosterImporter::from_reader(ROSTER_CSV.as_bytes()).expect("roster imports");
        InMemoryCatalog::new(users, Vec::new(), Vec::new())
            .with_schemes_from_reader(SCHEMES_JSON.as_bytes())
            .expect("schemes load")
    }

    pub(super) fn service() -> Arc<EligibilityService<InMemoryCatalog, InMemoryCatalog>> {
        let catalog = Arc::new(catalog());
        Arc::new(EligibilityService::new(catalog.clone(), catalog))
    }

    pub(super) fn router() -> axum::Router {
        let auth = Arc::new(SessionAuthenticator::new(&AuthConfig {
            demo_otp: OTP.to_string(),
            session_ttl_minutes: 15,
        }));
        eligibility_router(service(), auth)
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use citizen_services::eligibility::{CriterionCategory, CriterionStatus, SchemeId, UserId};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[test]
fn roster_citizens_are_scored_against_loaded_schemes() {
    let service = common::service();

    let lakshmi = service
        .ranked(&UserId("c-100".to_string()))
        .expect("report for Lakshmi");
    assert_eq!(lakshmi.evaluated, 3);
    assert_eq!(lakshmi.eligible_count, 1);
    assert_eq!(lakshmi.verdicts[0].scheme_id.0, "kerala-fishers");
    assert_eq!(lakshmi.verdicts[0].eligibility_score, 100.0);

    let meena = service
        .eligible(&UserId("c-300".to_string()))
        .expect("report for Meena");
    assert_eq!(meena.verdicts.len(), 1);
    let credit = &meena.verdicts[0];
    assert_eq!(credit.scheme_id.0, "kisan-credit");
    assert_eq!(
        credit.eligibility_breakdown[&CriterionCategory::CustomCriteria].status,
        CriterionStatus::Partial
    );
}

#[test]
fn near_misses_explain_what_is_missing() {
    let service = common::service();

    let report = service
        .ineligible(&UserId("c-200".to_string()))
        .expect("report for Arjun");

    let ids: Vec<&str> = report
        .verdicts
        .iter()
        .map(|verdict| verdict.scheme_id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["kisan-credit", "kerala-fishers"]);
    assert_eq!(
        report.verdicts[0].missing_criteria,
        vec!["Occupation requirement: farmer".to_string()]
    );
    assert_eq!(report.verdicts[1].missing_criteria.len(), 2);
    assert!(report.verdicts[1]
        .missing_criteria
        .contains(&"Location requirement: Kerala".to_string()));
}

#[test]
fn inactive_schemes_are_skipped_in_reports_but_checkable() {
    let service = common::service();
    let arjun = UserId("c-200".to_string());

    let ranked = service.ranked(&arjun).expect("ranked report");
    assert!(ranked
        .verdicts
        .iter()
        .all(|verdict| verdict.scheme_id.0 != "legacy-grant"));

    let legacy = service
        .check(&arjun, &SchemeId("legacy-grant".to_string()))
        .expect("inactive scheme checkable");
    assert!(legacy.is_eligible);
    assert_eq!(legacy.eligibility_score, 0.0);
}

#[tokio::test]
async fn citizen_signs_in_and_reviews_eligibility_over_http() {
    let router = common::router();

    let login = router
        .clone()
        .oneshot(
            Request::post("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "phone": "9400000002", "otp": common::OTP }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("login executes");
    assert_eq!(login.status(), StatusCode::OK);
    let token = json_body(login).await["token"]
        .as_str()
        .expect("token issued")
        .to_string();

    let ranked = router
        .clone()
        .oneshot(
            Request::get("/api/v1/eligibility")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("ranking executes");
    assert_eq!(ranked.status(), StatusCode::OK);

    let body = json_body(ranked).await;
    assert_eq!(body["userId"], "c-200");
    assert_eq!(body["eligibleCount"], 1);
    assert_eq!(body["verdicts"][0]["schemeId"], "skill-india");
    assert_eq!(
        body["verdicts"][0]["eligibilityBreakdown"]["occupation"]["userValue"],
        "student"
    );
}

#[tokio::test]
async fn citizens_without_a_phone_cannot_sign_in() {
    let router = common::router();

    let response = router
        .oneshot(
            Request::post("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "phone": "", "otp": common::OTP }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("login executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
