pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::recommendation::handlers::handle_recommend;
use crate::restaurants::handlers as restaurants;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route("/api/v1/recommend", get(handle_recommend))
        // Restaurant API
        .route(
            "/api/v1/restaurants",
            get(restaurants::handle_list_restaurants).post(restaurants::handle_create_restaurant),
        )
        .route(
            "/api/v1/restaurants/:id",
            get(restaurants::handle_get_restaurant),
        )
        .route(
            "/api/v1/restaurants/:id/reviews",
            post(restaurants::handle_create_review),
        )
        .route("/api/v1/items", post(restaurants::handle_create_item))
        .route("/api/v1/search", get(restaurants::handle_search))
        // User API
        .route("/api/v1/users/:id", get(users::handle_get_user))
        .route(
            "/api/v1/users/:id/preferences",
            put(users::handle_update_preferences),
        )
        .route(
            "/api/v1/favorites",
            get(users::handle_list_favorites).post(users::handle_add_favorite),
        )
        .with_state(state)
}
