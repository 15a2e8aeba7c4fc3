use super::super::domain::{EligibilityCriteria, User};
use super::{CriterionCategory, CriterionOutcome, CriterionStatus, CriterionValue, ValueRange};

const DEFAULT_MIN_AGE: u32 = 0;
const DEFAULT_MAX_AGE: u32 = 100;

/// Result of a single machine-checkable criterion.
pub(crate) struct CriterionCheck {
    pub category: CriterionCategory,
    pub passed: bool,
    pub message: String,
    /// Human-readable requirement reported when the check fails.
    pub requirement: String,
    pub user_value: CriterionValue,
    pub required_value: CriterionValue,
}

impl CriterionCheck {
    pub fn into_outcome(self) -> CriterionOutcome {
        let status = if self.passed {
            CriterionStatus::Eligible
        } else {
            CriterionStatus::Ineligible
        };

        CriterionOutcome {
            status,
            message: self.message,
            user_value: Some(self.user_value),
            required_value: Some(self.required_value),
        }
    }
}

/// Runs every applicable hard criterion in evaluation order:
/// age, gender, occupation, income, state.
pub(crate) fn hard_checks(user: &User, criteria: &EligibilityCriteria) -> Vec<CriterionCheck> {
    [
        check_age(user, criteria),
        check_gender(user, criteria),
        check_occupation(user, criteria),
        check_income(user, criteria),
        check_state(user, criteria),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub(crate) fn check_age(user: &User, criteria: &EligibilityCriteria) -> Option<CriterionCheck> {
    let age = user.age;
    let (passed, message) = match (criteria.min_age, criteria.max_age) {
        (None, None) => return None,
        (Some(min), Some(max)) => {
            if age >= min && age <= max {
                (true, format!("Age {age} is within the required range of {min}-{max} years"))
            } else {
                (false, format!("Age {age} is outside the required range of {min}-{max} years"))
            }
        }
        (Some(min), None) => {
            if age >= min {
                (true, format!("Age {age} meets the minimum age of {min} years"))
            } else {
                (false, format!("Age {age} is below the minimum age of {min} years"))
            }
        }
        (None, Some(max)) => {
            if age <= max {
                (true, format!("Age {age} is within the maximum age of {max} years"))
            } else {
                (false, format!("Age {age} exceeds the maximum age of {max} years"))
            }
        }
    };

    Some(CriterionCheck {
        category: CriterionCategory::Age,
        passed,
        message,
        requirement: format!(
            "{} requirement: {}-{} years",
            CriterionCategory::Age.requirement_label(),
            criteria.min_age.unwrap_or(DEFAULT_MIN_AGE),
            criteria.max_age.unwrap_or(DEFAULT_MAX_AGE)
        ),
        user_value: CriterionValue::Number(u64::from(age)),
        required_value: CriterionValue::Range(ValueRange {
            min: criteria.min_age.map(u64::from),
            max: criteria.max_age.map(u64::from),
        }),
    })
}

pub(crate) fn check_gender(user: &User, criteria: &EligibilityCriteria) -> Option<CriterionCheck> {
    let requirement = criteria.gender?;
    let required = requirement.restricted_to()?;

    let passed = user.gender == required;
    let message = if passed {
        format!("Gender requirement met ({})", required.label())
    } else {
        format!("Scheme is only for {} applicants", required.label())
    };

    Some(CriterionCheck {
        category: CriterionCategory::Gender,
        passed,
        message,
        requirement: format!(
            "{} requirement: {}",
            CriterionCategory::Gender.requirement_label(),
            required.label()
        ),
        user_value: CriterionValue::Text(user.gender.label().to_string()),
        required_value: CriterionValue::Text(requirement.label().to_string()),
    })
}

pub(crate) fn check_occupation(
    user: &User,
    criteria: &EligibilityCriteria,
) -> Option<CriterionCheck> {
    if criteria.occupation.is_empty() {
        return None;
    }

    let occupation = user.occupation.label();
    let allowed = criteria.occupation.join(", ");
    let passed = criteria
        .occupation
        .iter()
        .any(|candidate| candidate == occupation);
    let message = if passed {
        format!("Occupation '{occupation}' is eligible for this scheme")
    } else {
        format!("Occupation '{occupation}' is not among eligible occupations: {allowed}")
    };

    Some(CriterionCheck {
        category: CriterionCategory::Occupation,
        passed,
        message,
        requirement: format!(
            "{} requirement: {allowed}",
            CriterionCategory::Occupation.requirement_label()
        ),
        user_value: CriterionValue::Text(occupation.to_string()),
        required_value: CriterionValue::Set(criteria.occupation.clone()),
    })
}

pub(crate) fn check_income(user: &User, criteria: &EligibilityCriteria) -> Option<CriterionCheck> {
    let income = user.annual_income;
    let shown = format_rupees(income);
    let (passed, message) = match (criteria.min_income, criteria.max_income) {
        (None, None) => return None,
        (Some(min), Some(max)) => {
            let range = format!("{}-{}", format_rupees(min), format_rupees(max));
            if income >= min && income <= max {
                (true, format!("Annual income {shown} is within the required range of {range}"))
            } else {
                (false, format!("Annual income {shown} is outside the required range of {range}"))
            }
        }
        (Some(min), None) => {
            let floor = format_rupees(min);
            if income >= min {
                (true, format!("Annual income {shown} meets the minimum of {floor}"))
            } else {
                (false, format!("Annual income {shown} is below the minimum of {floor}"))
            }
        }
        (None, Some(max)) => {
            let ceiling = format_rupees(max);
            if income <= max {
                (true, format!("Annual income {shown} is within the limit of {ceiling}"))
            } else {
                (false, format!("Annual income {shown} exceeds the limit of {ceiling}"))
            }
        }
    };

    let upper = criteria
        .max_income
        .map(format_rupees)
        .unwrap_or_else(|| "no upper limit".to_string());

    Some(CriterionCheck {
        category: CriterionCategory::Income,
        passed,
        message,
        requirement: format!(
            "{} requirement: {} - {upper}",
            CriterionCategory::Income.requirement_label(),
            format_rupees(criteria.min_income.unwrap_or(0))
        ),
        user_value: CriterionValue::Number(income),
        required_value: CriterionValue::Range(ValueRange {
            min: criteria.min_income,
            max: criteria.max_income,
        }),
    })
}

pub(crate) fn check_state(user: &User, criteria: &EligibilityCriteria) -> Option<CriterionCheck> {
    if criteria.state.is_empty() {
        return None;
    }

    let state = user.state.as_str();
    let available = criteria.state.join(", ");
    let passed = criteria.state.iter().any(|candidate| candidate == state);
    let message = if passed {
        format!("Residents of {state} are eligible")
    } else {
        format!("Scheme is not available in {state} (available in: {available})")
    };

    Some(CriterionCheck {
        category: CriterionCategory::State,
        passed,
        message,
        requirement: format!(
            "{} requirement: {available}",
            CriterionCategory::State.requirement_label()
        ),
        user_value: CriterionValue::Text(state.to_string()),
        required_value: CriterionValue::Set(criteria.state.clone()),
    })
}

/// Free-text criteria cannot be verified, so they are surfaced as a partial match.
pub(crate) fn custom_criteria_advisory(criteria: &EligibilityCriteria) -> Option<CriterionOutcome> {
    if criteria.custom_criteria.is_empty() {
        return None;
    }

    Some(CriterionOutcome {
        status: CriterionStatus::Partial,
        message: format!(
            "Additional criteria to self-verify: {}",
            criteria.custom_criteria.join("; ")
        ),
        user_value: None,
        required_value: Some(CriterionValue::Set(criteria.custom_criteria.clone())),
    })
}

/// Formats an amount with Indian digit grouping, e.g. `₹1,80,000`.
pub(crate) fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{tail}", groups.join(","))
}
