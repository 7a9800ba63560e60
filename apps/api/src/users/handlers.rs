use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::restaurant::{RestaurantRow, RESTAURANT_COLUMNS};
use crate::models::user::{UserRow, USER_COLUMNS};
use crate::restaurants::handlers::restaurant_exists;
use crate::state::AppState;
use crate::users::validation::{parse_user_id, validate_preferences, USER_ID_REQUIRED};

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub age: i32,
    pub favorite_places: Vec<String>,
    pub favorite_cuisines: Vec<String>,
    pub allergens: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub user_id: i64,
    pub restaurant_id: i64,
}

/// `?user_id=` (or `?userId=`). Kept as text so a bad value gets our error body,
/// not the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    #[serde(alias = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserRow>, AppError> {
    let user = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    Ok(Json(user))
}

/// PUT /api/v1/users/:id/preferences
///
/// Lists are stored comma-joined; the recommendation prompt reads them back verbatim.
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<UpdatePreferencesRequest>,
) -> Result<Json<UserRow>, AppError> {
    let columns = validate_preferences(
        request.age,
        &request.favorite_places,
        &request.favorite_cuisines,
        &request.allergens,
    )?;

    let user = sqlx::query_as::<_, UserRow>(&format!(
        "UPDATE users \
         SET age = $1, favorite_places = $2, favorite_cuisines = $3, allergens = $4 \
         WHERE id = $5 \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(columns.age)
    .bind(&columns.favorite_places)
    .bind(&columns.favorite_cuisines)
    .bind(&columns.allergens)
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    info!("Updated preferences for user {user_id}");
    Ok(Json(user))
}

/// POST /api/v1/favorites
pub async fn handle_add_favorite(
    State(state): State<AppState>,
    Json(request): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    if !user_exists(&state.db, request.user_id).await? {
        return Err(AppError::NotFound(format!(
            "User {} not found",
            request.user_id
        )));
    }
    if !restaurant_exists(&state.db, request.restaurant_id).await? {
        return Err(AppError::NotFound(format!(
            "Restaurant {} not found",
            request.restaurant_id
        )));
    }

    // (user_id, restaurant_id) is unique; a no-op insert means it was already there
    let inserted = sqlx::query(
        r#"
        INSERT INTO favorites (user_id, restaurant_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, restaurant_id) DO NOTHING
        "#,
    )
    .bind(request.user_id)
    .bind(request.restaurant_id)
    .execute(&state.db)
    .await?
    .rows_affected();

    if inserted == 0 {
        return Err(AppError::Conflict(
            "Restaurant is already in favorites".to_string(),
        ));
    }

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Restaurant added to favorites".to_string(),
        }),
    ))
}

/// GET /api/v1/favorites?user_id=
pub async fn handle_list_favorites(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<RestaurantRow>>, AppError> {
    let user_id = parse_user_id(params.user_id.as_deref())
        .ok_or_else(|| AppError::Validation(USER_ID_REQUIRED.to_string()))?;

    if !user_exists(&state.db, user_id).await? {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }

    let restaurants = sqlx::query_as::<_, RestaurantRow>(&format!(
        "SELECT {RESTAURANT_COLUMNS} FROM favorites f \
         INNER JOIN restaurants r ON f.restaurant_id = r.id \
         INNER JOIN cuisines c ON r.cuisine_id = c.id \
         WHERE f.user_id = $1 ORDER BY r.id"
    ))
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    if restaurants.is_empty() {
        return Err(AppError::NotFound("No favorites found".to_string()));
    }
    Ok(Json(restaurants))
}

pub async fn user_exists(pool: &PgPool, user_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;

    fn query(uri: &str) -> UserIdQuery {
        let uri: Uri = uri.parse().unwrap();
        Query::<UserIdQuery>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_user_id_query_accepts_both_spellings() {
        assert_eq!(query("/api/v1/favorites?user_id=3").user_id.as_deref(), Some("3"));
        assert_eq!(query("/api/v1/favorites?userId=3").user_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_user_id_query_tolerates_missing_or_bad_values() {
        assert_eq!(query("/api/v1/favorites").user_id, None);
        assert_eq!(query("/api/v1/favorites?user_id=abc").user_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_update_preferences_request_shape() {
        let request: UpdatePreferencesRequest = serde_json::from_value(serde_json::json!({
            "age": 31,
            "favorite_places": ["Downtown"],
            "favorite_cuisines": ["Italian"],
            "allergens": ["nuts", "gluten"]
        }))
        .unwrap();
        assert_eq!(request.allergens, vec!["nuts", "gluten"]);
    }

    #[test]
    fn test_update_preferences_rejects_scalar_lists() {
        let result: Result<UpdatePreferencesRequest, _> =
            serde_json::from_value(serde_json::json!({
                "age": 31,
                "favorite_places": "Downtown",
                "favorite_cuisines": ["Italian"],
                "allergens": ["nuts"]
            }));
        assert!(result.is_err());
    }
}
