use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommendation::client::RecommendationGenerator;
use crate::store::RestaurantStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Read side used by the recommendation pipeline. Default: PgRestaurantStore over `db`.
    pub store: Arc<dyn RestaurantStore>,
    /// Pluggable generation backend. Default: the Gemini `LlmClient`.
    pub generator: Arc<dyn RecommendationGenerator>,
    pub config: Config,
}
