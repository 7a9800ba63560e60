use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::restaurant::{MenuItemRow, RestaurantRow, ReviewRow, RESTAURANT_COLUMNS};
use crate::restaurants::validation::{validate_new_item, validate_new_restaurant, validate_review};
use crate::state::AppState;
use crate::users::handlers::user_exists;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: String,
    pub city: String,
    pub area: String,
    /// Cuisine name; must already exist.
    pub cuisine: String,
    #[serde(default)]
    pub allergens: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    /// Restaurant name the item belongs to.
    pub restaurant: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub comment: String,
    pub rating: i32,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RestaurantDetailResponse {
    #[serde(flatten)]
    pub restaurant: RestaurantRow,
    pub items: Vec<MenuItemRow>,
    pub reviews: Vec<ReviewRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/restaurants
pub async fn handle_list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantRow>>, AppError> {
    let restaurants = sqlx::query_as::<_, RestaurantRow>(&format!(
        "SELECT {RESTAURANT_COLUMNS} FROM restaurants r \
         INNER JOIN cuisines c ON r.cuisine_id = c.id ORDER BY r.id"
    ))
    .fetch_all(&state.db)
    .await?;

    if restaurants.is_empty() {
        return Err(AppError::NotFound("Restaurants not found".to_string()));
    }
    Ok(Json(restaurants))
}

/// GET /api/v1/restaurants/:id
///
/// The restaurant with its menu items and reviews.
pub async fn handle_get_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> Result<Json<RestaurantDetailResponse>, AppError> {
    let restaurant = fetch_restaurant(&state.db, restaurant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant {restaurant_id} not found")))?;

    let items = sqlx::query_as::<_, MenuItemRow>(
        "SELECT id, name, price, image, restaurant_id FROM menu_items \
         WHERE restaurant_id = $1 ORDER BY id",
    )
    .bind(restaurant_id)
    .fetch_all(&state.db)
    .await?;

    let reviews = sqlx::query_as::<_, ReviewRow>(
        "SELECT id, comment, rating, user_id, restaurant_id, created_at FROM reviews \
         WHERE restaurant_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(restaurant_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(RestaurantDetailResponse {
        restaurant,
        items,
        reviews,
    }))
}

/// POST /api/v1/restaurants
pub async fn handle_create_restaurant(
    State(state): State<AppState>,
    Json(request): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<RestaurantRow>), AppError> {
    validate_new_restaurant(
        &request.name,
        &request.street,
        &request.city,
        &request.area,
        &request.cuisine,
        request.latitude,
        request.longitude,
    )?;
    let name = request.name.trim();

    let taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM restaurants WHERE name = $1)")
            .bind(name)
            .fetch_one(&state.db)
            .await?;
    if taken {
        return Err(AppError::Validation(
            "Restaurant with same name already exists".to_string(),
        ));
    }

    let cuisine_id: i64 = sqlx::query_scalar("SELECT id FROM cuisines WHERE name = $1")
        .bind(request.cuisine.trim())
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cuisine '{}' not found", request.cuisine)))?;

    let restaurant_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO restaurants (name, latitude, longitude, street, city, area, allergens, cuisine_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(request.latitude)
    .bind(request.longitude)
    .bind(request.street.trim())
    .bind(request.city.trim())
    .bind(request.area.trim())
    .bind(request.allergens.trim())
    .bind(cuisine_id)
    .fetch_one(&state.db)
    .await?;

    let restaurant = fetch_restaurant(&state.db, restaurant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant {restaurant_id} not found")))?;

    info!("Created restaurant {} ({})", restaurant.id, restaurant.name);
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// GET /api/v1/search?name=
///
/// Exact-name lookup.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<RestaurantRow>, AppError> {
    let name = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("name is required".to_string()))?;

    let restaurant = sqlx::query_as::<_, RestaurantRow>(&format!(
        "SELECT {RESTAURANT_COLUMNS} FROM restaurants r \
         INNER JOIN cuisines c ON r.cuisine_id = c.id WHERE r.name = $1"
    ))
    .bind(name)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

    Ok(Json(restaurant))
}

/// POST /api/v1/items
pub async fn handle_create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<MenuItemRow>), AppError> {
    validate_new_item(&request.name, request.price, &request.restaurant)?;

    let restaurant_id: i64 = sqlx::query_scalar("SELECT id FROM restaurants WHERE name = $1")
        .bind(request.restaurant.trim())
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

    let item = sqlx::query_as::<_, MenuItemRow>(
        r#"
        INSERT INTO menu_items (name, price, image, restaurant_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, price, image, restaurant_id
        "#,
    )
    .bind(request.name.trim())
    .bind(request.price)
    .bind(request.image.as_deref())
    .bind(restaurant_id)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// POST /api/v1/restaurants/:id/reviews
pub async fn handle_create_review(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewRow>), AppError> {
    validate_review(&request.comment, request.rating)?;

    if !restaurant_exists(&state.db, restaurant_id).await? {
        return Err(AppError::NotFound(format!(
            "Restaurant {restaurant_id} not found"
        )));
    }
    if !user_exists(&state.db, request.user_id).await? {
        return Err(AppError::NotFound(format!(
            "User {} not found",
            request.user_id
        )));
    }

    let review = sqlx::query_as::<_, ReviewRow>(
        r#"
        INSERT INTO reviews (comment, rating, user_id, restaurant_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, comment, rating, user_id, restaurant_id, created_at
        "#,
    )
    .bind(request.comment.trim())
    .bind(request.rating)
    .bind(request.user_id)
    .bind(restaurant_id)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

// ────────────────────────────────────────────────────────────────────────────
// Queries
// ────────────────────────────────────────────────────────────────────────────

async fn fetch_restaurant(
    pool: &PgPool,
    restaurant_id: i64,
) -> Result<Option<RestaurantRow>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantRow>(&format!(
        "SELECT {RESTAURANT_COLUMNS} FROM restaurants r \
         INNER JOIN cuisines c ON r.cuisine_id = c.id WHERE r.id = $1"
    ))
    .bind(restaurant_id)
    .fetch_optional(pool)
    .await
}

pub async fn restaurant_exists(pool: &PgPool, restaurant_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM restaurants WHERE id = $1)")
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
}
