//! Axum route handler for the Recommendation API.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::restaurant::RestaurantCandidate;
use crate::recommendation::pipeline::{recommend_for_user, RecommendationError};
use crate::state::AppState;
use crate::users::handlers::UserIdQuery;
use crate::users::validation::{parse_user_id, USER_ID_REQUIRED};

pub fn require_user_id(raw: Option<&str>) -> Result<i64, RecommendationError> {
    parse_user_id(raw)
        .ok_or_else(|| RecommendationError::InvalidInput(USER_ID_REQUIRED.to_string()))
}

/// GET /api/v1/recommend?user_id=
///
/// Returns the restaurants the model picked for the user, in the model's order.
/// An empty list means nothing matched; an unreachable model is a 502.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<RestaurantCandidate>>, AppError> {
    let user_id = require_user_id(query.user_id.as_deref())?;

    let recommendations = recommend_for_user(
        state.store.as_ref(),
        state.generator.as_ref(),
        user_id,
        state.config.recommendation_timeout,
    )
    .await?;

    Ok(Json(recommendations))
}
