//! Response Resolver — maps the model's free text back onto known restaurants.
//!
//! Matching is exact: case-sensitive and whitespace-exact after trimming each token.
//! Output follows response order and keeps duplicates.

use std::collections::HashMap;

use tracing::debug;

use crate::models::restaurant::RestaurantCandidate;

/// Splits the raw response into trimmed, non-empty name tokens.
pub fn parse_recommended_names(raw: &str) -> Vec<&str> {
    raw.trim()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Resolves each name token to a candidate. Unknown names are dropped.
/// The result is always a subset of `candidates`.
pub fn resolve_recommendations(
    raw: &str,
    candidates: &[RestaurantCandidate],
) -> Vec<RestaurantCandidate> {
    let by_name: HashMap<&str, &RestaurantCandidate> = candidates
        .iter()
        .map(|c| (c.name.as_str(), c))
        .collect();

    parse_recommended_names(raw)
        .into_iter()
        .filter_map(|name| match by_name.get(name) {
            Some(candidate) => Some((*candidate).clone()),
            None => {
                debug!("Dropping unknown restaurant name from model output: {name:?}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::testing::{luigis, make_candidate, sushi_go};

    fn names(resolved: &[RestaurantCandidate]) -> Vec<&str> {
        resolved.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_parse_names_trims_and_drops_empty_tokens() {
        assert_eq!(
            parse_recommended_names("  Luigi's ,, Sushi Go,  ,\n"),
            vec!["Luigi's", "Sushi Go"]
        );
    }

    #[test]
    fn test_parse_names_of_blank_response_is_empty() {
        assert!(parse_recommended_names("").is_empty());
        assert!(parse_recommended_names("   \n\t").is_empty());
        assert!(parse_recommended_names(" , ,").is_empty());
    }

    #[test]
    fn test_single_match() {
        let resolved = resolve_recommendations("Luigi's", &[luigis(), sushi_go()]);
        assert_eq!(resolved, vec![luigis()]);
    }

    #[test]
    fn test_unknown_names_are_dropped_keeping_response_order() {
        let resolved = resolve_recommendations(
            "Luigi's, Sushi Go, Pizza Palace",
            &[sushi_go(), luigis()],
        );
        assert_eq!(names(&resolved), vec!["Luigi's", "Sushi Go"]);
    }

    #[test]
    fn test_response_order_wins_over_candidate_order() {
        let resolved = resolve_recommendations("Sushi Go, Luigi's", &[luigis(), sushi_go()]);
        assert_eq!(names(&resolved), vec!["Sushi Go", "Luigi's"]);
    }

    #[test]
    fn test_empty_response_resolves_to_nothing() {
        assert!(resolve_recommendations("", &[luigis(), sushi_go()]).is_empty());
    }

    #[test]
    fn test_no_known_names_is_empty_not_error() {
        assert!(resolve_recommendations("Pizza Palace, Burger Barn", &[luigis()]).is_empty());
    }

    #[test]
    fn test_matching_is_case_and_whitespace_exact() {
        let resolved = resolve_recommendations("luigi's, Sushi  Go, SUSHI GO", &[luigis(), sushi_go()]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let resolved = resolve_recommendations("Luigi's, Luigi's", &[luigis()]);
        assert_eq!(names(&resolved), vec!["Luigi's", "Luigi's"]);
    }

    #[test]
    fn test_output_is_always_a_subset_of_candidates() {
        let candidates = vec![
            luigis(),
            sushi_go(),
            make_candidate(3, "Taco Stop", "Midtown", "Mexican", ""),
        ];
        let responses = [
            "Taco Stop, Nowhere, Luigi's",
            "\"Luigi's, Sushi Go\"",
            "1. Luigi's\n2. Sushi Go",
            "Sushi Go,Taco Stop,Sushi Go",
            ",,,",
        ];

        for raw in responses {
            for resolved in resolve_recommendations(raw, &candidates) {
                assert!(
                    candidates.contains(&resolved),
                    "resolver invented {resolved:?} from {raw:?}"
                );
            }
        }
    }
}
