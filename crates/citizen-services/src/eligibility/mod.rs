//! Welfare scheme eligibility: citizen and scheme data, the scoring engine, and
//! the service and HTTP surface built on top of it.

pub mod domain;
pub mod evaluation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CitizenDocument, DocumentKind, EligibilityCriteria, Gender, GenderRequirement, Occupation,
    Scheme, SchemeId, SchemeStatus, User, UserId, VerificationStatus,
};
pub use evaluation::{
    CriterionCategory, CriterionOutcome, CriterionStatus, CriterionValue, EligibilityEngine,
    EligibilityVerdict, ValueRange, VerdictReasons,
};
pub use repository::{RepositoryError, SchemeRepository, UserRepository};
pub use router::{eligibility_router, EligibilityApi, LoginRequest, PreviewRequest};
pub use service::{EligibilityReport, EligibilityService, EligibilityServiceError};
