use super::CriterionCategory;

/// Maps each failed criterion, in order, to the advisory shown to the citizen.
pub(crate) fn advise(failed: &[CriterionCategory]) -> Vec<String> {
    failed
        .iter()
        .filter_map(|category| advisory_for(*category))
        .map(str::to_string)
        .collect()
}

fn advisory_for(category: CriterionCategory) -> Option<&'static str> {
    match category {
        CriterionCategory::Age => Some(
            "Check back once you meet the age requirement, or explore schemes designed for your age group",
        ),
        CriterionCategory::Gender => {
            Some("Look for gender-neutral schemes that offer similar benefits")
        }
        CriterionCategory::Occupation => {
            Some("Explore schemes tailored to your current occupation")
        }
        CriterionCategory::Income => {
            Some("Consider schemes designed for your income bracket")
        }
        CriterionCategory::State => {
            Some("Look for central government schemes that are available in every state")
        }
        CriterionCategory::CustomCriteria => None,
    }
}
