//! Candidate Formatter — renders the candidate set as one line per restaurant.

use crate::models::restaurant::RestaurantCandidate;
use crate::recommendation::pipeline::RecommendationError;

/// Rendered in place of an empty allergen declaration.
const NO_ALLERGENS: &str = "None";

/// Newline-joined candidate lines, in the same order as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCandidateSet(String);

impl FormattedCandidateSet {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `"<name> - <area> - Cuisine: <cuisine> - Allergens: <allergens or None>"`
pub fn format_candidate_line(candidate: &RestaurantCandidate) -> String {
    let allergens = if candidate.allergens.trim().is_empty() {
        NO_ALLERGENS
    } else {
        candidate.allergens.as_str()
    };

    format!(
        "{} - {} - Cuisine: {} - Allergens: {}",
        candidate.name, candidate.area, candidate.cuisine, allergens
    )
}

/// Formats every candidate. An empty set is an error: there is nothing to recommend.
pub fn format_candidates(
    candidates: &[RestaurantCandidate],
) -> Result<FormattedCandidateSet, RecommendationError> {
    if candidates.is_empty() {
        return Err(RecommendationError::EmptyCandidateSet);
    }

    Ok(FormattedCandidateSet(
        candidates
            .iter()
            .map(format_candidate_line)
            .collect::<Vec<_>>()
            .join("\n"),
    ))
}
