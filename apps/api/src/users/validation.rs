//! Validation for user ids and preference updates.

use crate::errors::AppError;

pub const USER_ID_REQUIRED: &str = "user_id is required and must be a number";

/// Parses a `user_id` query value. `None` when it is missing, blank or not an integer.
pub fn parse_user_id(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
}

/// Trims each value, drops blanks and joins with commas, the stored list format.
/// `None` when nothing is left.
pub fn join_preference_list(values: &[String]) -> Option<String> {
    let kept: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(","))
    }
}

/// The validated, storage-ready form of a preferences update.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceColumns {
    pub age: i32,
    pub favorite_places: String,
    pub favorite_cuisines: String,
    pub allergens: String,
}

pub fn validate_preferences(
    age: i32,
    favorite_places: &[String],
    favorite_cuisines: &[String],
    allergens: &[String],
) -> Result<PreferenceColumns, AppError> {
    if age <= 0 {
        return Err(AppError::Validation("age must be a positive number".to_string()));
    }

    let require = |values: &[String], field: &str| {
        join_preference_list(values)
            .ok_or_else(|| AppError::Validation(format!("{field} must be a non-empty list")))
    };

    Ok(PreferenceColumns {
        age,
        favorite_places: require(favorite_places, "favorite_places")?,
        favorite_cuisines: require(favorite_cuisines, "favorite_cuisines")?,
        allergens: require(allergens, "allergens")?,
    })
}
