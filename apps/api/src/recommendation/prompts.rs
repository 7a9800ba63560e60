//! Prompt Builder — the recommendation prompt and its output-format contract.
//!
//! The resolver splits the answer on commas, so the format instruction below is load-bearing.

use crate::recommendation::formatter::FormattedCandidateSet;
use crate::recommendation::preferences::UserPreferenceProfile;

pub const RECOMMENDATION_TASK: &str =
    "The user wants restaurant recommendations based on the following preferences:";

pub const CANDIDATES_HEADER: &str =
    "Below is the list of restaurants. Select the ones that match all of the user's preferences:";

pub const OUTPUT_FORMAT_INSTRUCTION: &str = "Return only the names of the matching restaurants, \
    written exactly as they appear in the list above, on a single line separated by commas. \
    Do NOT add any other text. If no restaurant matches, return nothing. \
    Use the following format:\n\"Name1, Name2, Name3\"";

/// The full instruction text sent upstream. Opaque to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationPrompt(String);

impl RecommendationPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Composes the profile and candidate lines into one prompt.
/// Field values are inserted as-is and never treated as template syntax.
pub fn build_prompt(
    profile: &UserPreferenceProfile,
    candidates: &FormattedCandidateSet,
) -> RecommendationPrompt {
    let sections = [
        RECOMMENDATION_TASK.to_string(),
        format!("- Location: {}", profile.favorite_places),
        format!("- Cuisine: {}", profile.favorite_cuisines),
        format!("- Allergens: {}", profile.allergens),
        String::new(),
        CANDIDATES_HEADER.to_string(),
        candidates.as_str().to_string(),
        String::new(),
        OUTPUT_FORMAT_INSTRUCTION.to_string(),
    ];

    RecommendationPrompt(sections.join("\n"))
}
