//! Preference Extractor — turns a stored user into the profile the prompt is built from.

use serde::Serialize;

use crate::models::user::UserRow;
use crate::recommendation::pipeline::RecommendationError;
use crate::store::RestaurantStore;

/// The three free-text preference fields of a user, copied verbatim.
/// Values are typically comma-joined lists; they are never parsed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserPreferenceProfile {
    pub favorite_places: String,
    pub favorite_cuisines: String,
    pub allergens: String,
}

impl From<&UserRow> for UserPreferenceProfile {
    fn from(user: &UserRow) -> Self {
        Self {
            favorite_places: user.favorite_places.clone().unwrap_or_default(),
            favorite_cuisines: user.favorite_cuisines.clone().unwrap_or_default(),
            allergens: user.allergens.clone().unwrap_or_default(),
        }
    }
}

/// Loads exactly one user and derives their profile. A missing user is `UserNotFound`.
pub async fn extract_preferences(
    store: &dyn RestaurantStore,
    user_id: i64,
) -> Result<UserPreferenceProfile, RecommendationError> {
    let user = store
        .get_user_by_id(user_id)
        .await?
        .ok_or(RecommendationError::UserNotFound(user_id))?;

    Ok(UserPreferenceProfile::from(&user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::testing::{make_user, InMemoryStore};

    #[test]
    fn test_profile_copies_fields_verbatim() {
        let user = make_user(1, "Downtown,Old Town", "Italian, Thai", " nuts ");
        let profile = UserPreferenceProfile::from(&user);
        assert_eq!(profile.favorite_places, "Downtown,Old Town");
        assert_eq!(profile.favorite_cuisines, "Italian, Thai");
        assert_eq!(profile.allergens, " nuts ");
    }

    #[test]
    fn test_profile_null_columns_become_empty() {
        let mut user = make_user(1, "", "", "");
        user.favorite_places = None;
        user.favorite_cuisines = None;
        user.allergens = None;
        assert_eq!(
            UserPreferenceProfile::from(&user),
            UserPreferenceProfile::default()
        );
    }

    #[tokio::test]
    async fn test_extract_preferences_missing_user() {
        let store = InMemoryStore::new(vec![], vec![]);
        let err = extract_preferences(&store, 99).await.unwrap_err();
        assert!(matches!(err, RecommendationError::UserNotFound(99)));
    }

    #[tokio::test]
    async fn test_extract_preferences_found_user() {
        let store = InMemoryStore::new(vec![make_user(3, "Uptown", "Japanese", "")], vec![]);
        let profile = extract_preferences(&store, 3).await.unwrap();
        assert_eq!(profile.favorite_places, "Uptown");
        assert_eq!(profile.favorite_cuisines, "Japanese");
        assert_eq!(profile.allergens, "");
    }
}
