//! Request validation for the restaurant catalogue. Pure functions, no I/O.

use crate::errors::AppError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_new_restaurant(
    name: &str,
    street: &str,
    city: &str,
    area: &str,
    cuisine: &str,
    latitude: f64,
    longitude: f64,
) -> Result<(), AppError> {
    for (value, field) in [
        (name, "name"),
        (street, "street"),
        (city, "city"),
        (area, "area"),
        (cuisine, "cuisine"),
    ] {
        require_text(value, field)?;
    }

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::Validation(
            "latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::Validation(
            "longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_new_item(name: &str, price: f64, restaurant: &str) -> Result<(), AppError> {
    require_text(name, "name")?;
    require_text(restaurant, "restaurant")?;
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_review(comment: &str, rating: i32) -> Result<(), AppError> {
    require_text(comment, "comment")?;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_restaurant_passes() {
        assert!(validate_new_restaurant(
            "Luigi's", "1 Main St", "Springfield", "Downtown", "Italian", 40.7, -74.0
        )
        .is_ok());
    }

    #[test]
    fn test_blank_field_is_named() {
        let err = validate_new_restaurant(
            "Luigi's", "  ", "Springfield", "Downtown", "Italian", 40.7, -74.0,
        )
        .unwrap_err();
        assert_eq!(message(err), "street is required");
    }

    #[test]
    fn test_coordinates_out_of_range() {
        assert!(validate_new_restaurant("a", "b", "c", "d", "e", 91.0, 0.0).is_err());
        assert!(validate_new_restaurant("a", "b", "c", "d", "e", 0.0, -180.5).is_err());
        assert!(validate_new_restaurant("a", "b", "c", "d", "e", f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_item_price_rules() {
        assert!(validate_new_item("Margherita", 0.0, "Luigi's").is_ok());
        assert!(validate_new_item("Margherita", -1.0, "Luigi's").is_err());
        assert!(validate_new_item("Margherita", f64::INFINITY, "Luigi's").is_err());
        assert!(validate_new_item("", 9.5, "Luigi's").is_err());
    }

    #[test]
    fn test_review_rating_bounds() {
        assert!(validate_review("Great pasta", 1).is_ok());
        assert!(validate_review("Great pasta", 5).is_ok());
        assert!(validate_review("Great pasta", 0).is_err());
        assert!(validate_review("Great pasta", 6).is_err());
        assert_eq!(
            message(validate_review(" ", 4).unwrap_err()),
            "comment is required"
        );
    }
}
