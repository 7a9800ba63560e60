//! Restaurant Store — the read side the recommendation pipeline depends on.
//!
//! `AppState` holds an `Arc<dyn RestaurantStore>`; production uses `PgRestaurantStore`,
//! tests swap in an in-memory store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::restaurant::{RestaurantCandidate, RESTAURANT_COLUMNS};
use crate::models::user::{UserRow, USER_COLUMNS};

#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserRow>, sqlx::Error>;

    /// Every restaurant joined with its cuisine name, ordered by id.
    async fn list_restaurants_with_cuisine(
        &self,
    ) -> Result<Vec<RestaurantCandidate>, sqlx::Error>;
}

/// PostgreSQL-backed store sharing the application pool.
pub struct PgRestaurantStore {
    pool: PgPool,
}

impl PgRestaurantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantStore for PgRestaurantStore {
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_restaurants_with_cuisine(
        &self,
    ) -> Result<Vec<RestaurantCandidate>, sqlx::Error> {
        sqlx::query_as::<_, RestaurantCandidate>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants r \
             INNER JOIN cuisines c ON r.cuisine_id = c.id ORDER BY r.id"
        ))
        .fetch_all(&self.pool)
        .await
    }
}
