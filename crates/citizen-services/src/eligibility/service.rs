use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::domain::{CitizenDocument, Scheme, SchemeId, SchemeStatus, User, UserId};
use super::evaluation::{EligibilityEngine, EligibilityVerdict};
use super::repository::{RepositoryError, SchemeRepository, UserRepository};

/// Service composing the citizen and scheme repositories with the eligibility engine.
pub struct EligibilityService<U, S> {
    users: Arc<U>,
    schemes: Arc<S>,
    engine: EligibilityEngine,
}

impl<U, S> EligibilityService<U, S>
where
    U: UserRepository + 'static,
    S: SchemeRepository + 'static,
{
    pub fn new(users: Arc<U>, schemes: Arc<S>) -> Self {
        Self {
            users,
            schemes,
            engine: EligibilityEngine::new(),
        }
    }

    pub fn citizen(&self, user_id: &UserId) -> Result<User, EligibilityServiceError> {
        self.users
            .find_by_id(user_id)?
            .ok_or_else(|| EligibilityServiceError::UserNotFound(user_id.clone()))
    }

    pub fn citizen_by_phone(&self, phone: &str) -> Result<User, EligibilityServiceError> {
        self.users
            .find_by_phone(phone)?
            .ok_or(EligibilityServiceError::PhoneNotRegistered)
    }

    pub fn documents(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CitizenDocument>, EligibilityServiceError> {
        let citizen = self.citizen(user_id)?;
        Ok(self.users.documents_for(&citizen.id)?)
    }

    /// Active schemes, optionally narrowed to one category.
    pub fn schemes(&self, category: Option<&str>) -> Result<Vec<Scheme>, EligibilityServiceError> {
        let schemes = match category.map(str::trim).filter(|value| !value.is_empty()) {
            Some(category) => self.schemes.by_category(category)?,
            None => self.schemes.active()?,
        };
        Ok(schemes)
    }

    pub fn scheme(&self, scheme_id: &SchemeId) -> Result<Scheme, EligibilityServiceError> {
        self.schemes
            .by_id(scheme_id)?
            .ok_or_else(|| EligibilityServiceError::SchemeNotFound(scheme_id.clone()))
    }

    /// Scheme detail as listed publicly; inactive and suspended schemes are not found.
    pub fn published_scheme(
        &self,
        scheme_id: &SchemeId,
    ) -> Result<Scheme, EligibilityServiceError> {
        let scheme = self.scheme(scheme_id)?;
        if scheme.status != SchemeStatus::Active {
            return Err(EligibilityServiceError::SchemeNotFound(scheme_id.clone()));
        }
        Ok(scheme)
    }

    /// Verdict for one scheme, whatever its publication status.
    pub fn check(
        &self,
        user_id: &UserId,
        scheme_id: &SchemeId,
    ) -> Result<EligibilityVerdict, EligibilityServiceError> {
        let citizen = self.citizen(user_id)?;
        let scheme = self.scheme(scheme_id)?;
        let verdict = self.engine.check_eligibility(&citizen, &scheme);
        debug!(
            user_id = %citizen.id.0,
            scheme_id = %scheme.id.0,
            eligible = verdict.is_eligible,
            score = verdict.eligibility_score,
            "eligibility evaluated"
        );
        Ok(verdict)
    }

    pub fn eligible(&self, user_id: &UserId) -> Result<EligibilityReport, EligibilityServiceError> {
        self.report(user_id, |engine, citizen, schemes| {
            engine.eligible_schemes(citizen, schemes)
        })
    }

    pub fn ineligible(
        &self,
        user_id: &UserId,
    ) -> Result<EligibilityReport, EligibilityServiceError> {
        self.report(user_id, |engine, citizen, schemes| {
            engine.ineligible_schemes(citizen, schemes)
        })
    }

    /// Every active scheme, eligible ones first.
    pub fn ranked(&self, user_id: &UserId) -> Result<EligibilityReport, EligibilityServiceError> {
        self.report(user_id, |engine, citizen, schemes| {
            engine.all_schemes_with_eligibility(citizen, schemes)
        })
    }

    fn report<F>(
        &self,
        user_id: &UserId,
        evaluate: F,
    ) -> Result<EligibilityReport, EligibilityServiceError>
    where
        F: FnOnce(&EligibilityEngine, &User, &[Scheme]) -> Vec<EligibilityVerdict>,
    {
        let citizen = self.citizen(user_id)?;
        self.report_for(&citizen, evaluate)
    }

    /// Ranks the active catalog for a profile that is not registered.
    pub fn preview(&self, profile: &User) -> Result<EligibilityReport, EligibilityServiceError> {
        self.report_for(profile, |engine, citizen, schemes| {
            engine.all_schemes_with_eligibility(citizen, schemes)
        })
    }

    fn report_for<F>(
        &self,
        citizen: &User,
        evaluate: F,
    ) -> Result<EligibilityReport, EligibilityServiceError>
    where
        F: FnOnce(&EligibilityEngine, &User, &[Scheme]) -> Vec<EligibilityVerdict>,
    {
        let schemes = self.schemes.active()?;
        let verdicts = evaluate(&self.engine, citizen, &schemes);
        let report = EligibilityReport::new(citizen.id.clone(), schemes.len(), verdicts);
        debug!(
            user_id = %report.user_id.0,
            evaluated = report.evaluated,
            eligible = report.eligible_count,
            "eligibility report built"
        );
        Ok(report)
    }
}

/// Batch eligibility results returned to API clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub user_id: UserId,
    /// Active schemes considered.
    pub evaluated: usize,
    pub eligible_count: usize,
    pub verdicts: Vec<EligibilityVerdict>,
}

impl EligibilityReport {
    fn new(user_id: UserId, evaluated: usize, verdicts: Vec<EligibilityVerdict>) -> Self {
        let eligible_count = verdicts.iter().filter(|verdict| verdict.is_eligible).count();
        Self {
            user_id,
            evaluated,
            eligible_count,
            verdicts,
        }
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error("user {0} not found")]
    UserNotFound(UserId),
    #[error("no citizen registered with that phone number")]
    PhoneNotRegistered,
    #[error("scheme {0} not found")]
    SchemeNotFound(SchemeId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
