mod recommendations;
mod rules;

use std::collections::BTreeMap;

use super::domain::{Scheme, SchemeId, User};
use serde::{Deserialize, Serialize};

/// Stateless evaluator scoring a citizen profile against scheme criteria.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates every criterion the scheme declares and explains the result.
    ///
    /// Hard criteria decide eligibility and make up the score; custom criteria
    /// are reported as warnings only.
    pub fn check_eligibility(&self, user: &User, scheme: &Scheme) -> EligibilityVerdict {
        let criteria = &scheme.eligibility_criteria;
        let mut verdict = EligibilityVerdict::empty(scheme.id.clone());
        let mut applicable = 0u32;
        let mut matched = 0u32;
        let mut failed = Vec::new();

        for check in rules::hard_checks(user, criteria) {
            applicable += 1;
            if check.passed {
                matched += 1;
                verdict.reasons.eligible.push(check.message.clone());
                verdict.matching_criteria.push(check.message.clone());
            } else {
                verdict.is_eligible = false;
                verdict.reasons.ineligible.push(check.message.clone());
                verdict.missing_criteria.push(check.requirement.clone());
                failed.push(check.category);
            }
            verdict
                .eligibility_breakdown
                .insert(check.category, check.into_outcome());
        }

        if let Some(advisory) = rules::custom_criteria_advisory(criteria) {
            verdict.reasons.warnings.push(advisory.message.clone());
            verdict
                .eligibility_breakdown
                .insert(CriterionCategory::CustomCriteria, advisory);
        }

        verdict.eligibility_score = score(matched, applicable);
        if !verdict.is_eligible {
            verdict.recommendations = recommendations::advise(&failed);
        }

        verdict
    }

    /// Eligible verdicts only, highest score first.
    pub fn eligible_schemes(&self, user: &User, schemes: &[Scheme]) -> Vec<EligibilityVerdict> {
        let mut verdicts: Vec<_> = schemes
            .iter()
            .map(|scheme| self.check_eligibility(user, scheme))
            .filter(|verdict| verdict.is_eligible)
            .collect();
        sort_by_score(&mut verdicts);
        verdicts
    }

    /// Ineligible verdicts only, highest score first.
    pub fn ineligible_schemes(&self, user: &User, schemes: &[Scheme]) -> Vec<EligibilityVerdict> {
        let mut verdicts: Vec<_> = schemes
            .iter()
            .map(|scheme| self.check_eligibility(user, scheme))
            .filter(|verdict| !verdict.is_eligible)
            .collect();
        sort_by_score(&mut verdicts);
        verdicts
    }

    /// Every verdict, eligible ones first, each group ordered by score.
    pub fn all_schemes_with_eligibility(
        &self,
        user: &User,
        schemes: &[Scheme],
    ) -> Vec<EligibilityVerdict> {
        let mut verdicts: Vec<_> = schemes
            .iter()
            .map(|scheme| self.check_eligibility(user, scheme))
            .collect();
        verdicts.sort_by(|left, right| {
            right.is_eligible.cmp(&left.is_eligible).then_with(|| {
                right
                    .eligibility_score
                    .total_cmp(&left.eligibility_score)
            })
        });
        verdicts
    }
}

fn score(matched: u32, applicable: u32) -> f64 {
    if applicable == 0 {
        return 0.0;
    }
    100.0 * f64::from(matched) / f64::from(applicable)
}

// `sort_by` is stable, so equal scores keep catalog order.
fn sort_by_score(verdicts: &mut [EligibilityVerdict]) {
    verdicts.sort_by(|left, right| right.eligibility_score.total_cmp(&left.eligibility_score));
}

/// Full, explainable eligibility result for one citizen and one scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityVerdict {
    pub scheme_id: SchemeId,
    pub is_eligible: bool,
    pub eligibility_score: f64,
    pub matching_criteria: Vec<String>,
    pub missing_criteria: Vec<String>,
    pub recommendations: Vec<String>,
    pub reasons: VerdictReasons,
    pub eligibility_breakdown: BTreeMap<CriterionCategory, CriterionOutcome>,
}

impl EligibilityVerdict {
    fn empty(scheme_id: SchemeId) -> Self {
        Self {
            scheme_id,
            is_eligible: true,
            eligibility_score: 0.0,
            matching_criteria: Vec::new(),
            missing_criteria: Vec::new(),
            recommendations: Vec::new(),
            reasons: VerdictReasons::default(),
            eligibility_breakdown: BTreeMap::new(),
        }
    }

    pub fn summary(&self) -> String {
        if self.is_eligible {
            format!("eligible (score {:.0})", self.eligibility_score)
        } else {
            format!(
                "not eligible (score {:.0}): {}",
                self.eligibility_score,
                self.missing_criteria.join("; ")
            )
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictReasons {
    pub eligible: Vec<String>,
    pub ineligible: Vec<String>,
    pub warnings: Vec<String>,
}

/// Criterion families, ordered as they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionCategory {
    Age,
    Gender,
    Occupation,
    Income,
    State,
    CustomCriteria,
}

impl CriterionCategory {
    /// Leading word of the requirement line reported for a failed criterion.
    pub const fn requirement_label(self) -> &'static str {
        match self {
            CriterionCategory::Age => "Age",
            CriterionCategory::Gender => "Gender",
            CriterionCategory::Occupation => "Occupation",
            CriterionCategory::Income => "Income",
            CriterionCategory::State => "Location",
            CriterionCategory::CustomCriteria => "Additional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionStatus {
    Eligible,
    Ineligible,
    Partial,
}

/// Breakdown entry for one criterion family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionOutcome {
    pub status: CriterionStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_value: Option<CriterionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_value: Option<CriterionValue>,
}

/// Values compared by a criterion, serialized as plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionValue {
    Number(u64),
    Text(String),
    Range(ValueRange),
    Set(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}
