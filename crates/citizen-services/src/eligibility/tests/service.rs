use super::common::*;
use crate::eligibility::domain::{DocumentKind, SchemeId, UserId};
use crate::eligibility::repository::RepositoryError;
use crate::eligibility::{EligibilityService, EligibilityServiceError};
use std::sync::Arc;

fn rahul() -> UserId {
    UserId("user-001".to_string())
}

fn gurpreet() -> UserId {
    UserId("user-002".to_string())
}

#[test]
fn check_evaluates_a_single_scheme() {
    let (service, _) = build_service();

    let verdict = service
        .check(&gurpreet(), &SchemeId("pm-kisan".to_string()))
        .expect("seeded citizen and scheme");

    assert!(verdict.is_eligible);
    assert_eq!(verdict.eligibility_score, 100.0);
    assert_eq!(verdict.reasons.warnings.len(), 1);
}

#[test]
fn check_reports_unknown_citizens() {
    let (service, _) = build_service();

    match service.check(
        &UserId("user-999".to_string()),
        &SchemeId("pm-kisan".to_string()),
    ) {
        Err(EligibilityServiceError::UserNotFound(id)) => assert_eq!(id.0, "user-999"),
        other => panic!("expected missing user, got {other:?}"),
    }
}

#[test]
fn check_reports_unknown_schemes() {
    let (service, _) = build_service();

    match service.check(&rahul(), &SchemeId("no-such-scheme".to_string())) {
        Err(EligibilityServiceError::SchemeNotFound(id)) => assert_eq!(id.0, "no-such-scheme"),
        other => panic!("expected missing scheme, got {other:?}"),
    }
}

#[test]
fn check_still_evaluates_inactive_schemes() {
    let (service, _) = build_service();

    let verdict = service
        .check(&rahul(), &SchemeId("indira-awaas".to_string()))
        .expect("inactive schemes remain addressable");

    assert!(verdict.is_eligible);
}

#[test]
fn published_scheme_hides_retired_schemes() {
    let (service, _) = build_service();

    let active = service
        .published_scheme(&SchemeId("pm-kisan".to_string()))
        .expect("active scheme is published");
    assert_eq!(active.id.0, "pm-kisan");

    for retired in ["indira-awaas", "stand-up-india"] {
        match service.published_scheme(&SchemeId(retired.to_string())) {
            Err(EligibilityServiceError::SchemeNotFound(id)) => assert_eq!(id.0, retired),
            other => panic!("expected {retired} to be hidden, got {other:?}"),
        }
    }
}

#[test]
fn eligible_report_covers_active_schemes_only() {
    let (service, catalog) = build_service();

    let report = service.eligible(&rahul()).expect("report builds");

    let active = catalog
        .schemes()
        .iter()
        .filter(|scheme| scheme.status == crate::eligibility::SchemeStatus::Active)
        .count();
    assert_eq!(report.evaluated, active);
    assert_eq!(report.user_id, rahul());
    assert_eq!(report.eligible_count, report.verdicts.len());
    let listed: Vec<&str> = report
        .verdicts
        .iter()
        .map(|verdict| verdict.scheme_id.0.as_str())
        .collect();
    assert_eq!(listed, vec!["post-matric-scholarship", "ayushman-bharat"]);
}

#[test]
fn ineligible_report_orders_near_misses_first() {
    let (service, _) = build_service();

    let report = service.ineligible(&rahul()).expect("report builds");

    assert_eq!(report.eligible_count, 0);
    let listed: Vec<&str> = report
        .verdicts
        .iter()
        .map(|verdict| verdict.scheme_id.0.as_str())
        .collect();
    assert_eq!(
        listed,
        vec![
            "pm-kisan",
            "mahila-samman",
            "pmegp",
            "old-age-pension",
            "punjab-crop-residue",
        ]
    );
    assert!(report
        .verdicts
        .iter()
        .all(|verdict| !verdict.recommendations.is_empty()));
}

#[test]
fn ranked_report_lists_every_active_scheme() {
    let (service, _) = build_service();

    let report = service.ranked(&gurpreet()).expect("report builds");

    assert_eq!(report.verdicts.len(), report.evaluated);
    assert_eq!(report.eligible_count, 4);
    assert!(report.verdicts[..4].iter().all(|verdict| verdict.is_eligible));
    assert!(report.verdicts[4..].iter().all(|verdict| !verdict.is_eligible));
    assert!(!report.verdicts.iter().any(|verdict| {
        verdict.scheme_id.0 == "indira-awaas" || verdict.scheme_id.0 == "stand-up-india"
    }));
}

#[test]
fn scheme_listing_filters_by_category() {
    let (service, _) = build_service();

    let agriculture = service
        .schemes(Some("Agriculture"))
        .expect("category listing");
    let all = service.schemes(None).expect("full listing");
    let blank = service.schemes(Some("  ")).expect("blank category");

    assert_eq!(agriculture.len(), 2);
    assert!(agriculture
        .iter()
        .all(|scheme| scheme.category == "agriculture"));
    assert_eq!(all.len(), 7);
    assert_eq!(blank.len(), all.len());
}

#[test]
fn citizens_are_found_by_phone() {
    let (service, _) = build_service();

    let citizen = service
        .citizen_by_phone("9876501234")
        .expect("registered phone");
    assert_eq!(citizen.id, gurpreet());

    assert!(matches!(
        service.citizen_by_phone("0000000000"),
        Err(EligibilityServiceError::PhoneNotRegistered)
    ));
}

#[test]
fn documents_belong_to_the_requested_citizen() {
    let (service, _) = build_service();

    let documents = service.documents(&gurpreet()).expect("documents listed");

    assert_eq!(documents.len(), 2);
    assert!(documents.iter().all(|document| document.owner == gurpreet()));
    assert!(documents
        .iter()
        .any(|document| document.kind == DocumentKind::BankPassbook));
    assert!(matches!(
        service.documents(&UserId("user-999".to_string())),
        Err(EligibilityServiceError::UserNotFound(_))
    ));
}

#[test]
fn repository_outages_propagate() {
    let unavailable = Arc::new(UnavailableRepository);
    let service = EligibilityService::new(unavailable.clone(), unavailable);

    match service.ranked(&rahul()) {
        Err(EligibilityServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline");
        }
        other => panic!("expected repository outage, got {other:?}"),
    }
}

#[test]
fn scheme_outage_surfaces_after_citizen_lookup() {
    let (_, catalog) = build_service();
    let service = EligibilityService::new(catalog, Arc::new(UnavailableRepository));

    assert!(matches!(
        service.eligible(&rahul()),
        Err(EligibilityServiceError::Repository(_))
    ));
    assert!(matches!(
        service.eligible(&UserId("user-999".to_string())),
        Err(EligibilityServiceError::UserNotFound(_))
    ));
}

#[test]
fn preview_scores_profiles_outside_the_registry() {
    let (service, _) = build_service();

    let report = service.preview(&punjab_farmer()).expect("preview builds");

    assert_eq!(report.user_id.0, "citizen-test");
    assert_eq!(report.evaluated, 7);
    assert_eq!(report.eligible_count, 4);
}
