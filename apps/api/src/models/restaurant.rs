use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RestaurantRow {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: String,
    pub city: String,
    pub area: String,
    pub allergens: String,
    pub cuisine_id: i64,
    pub cuisine: String,
}

/// Select list for `RestaurantRow`; expects `restaurants r JOIN cuisines c`.
pub const RESTAURANT_COLUMNS: &str = "r.id, r.name, r.latitude, r.longitude, r.street, r.city, \
    r.area, r.allergens, r.cuisine_id, c.name AS cuisine";

/// A restaurant as offered to the recommendation model. The full joined row is kept so
/// the recommend endpoint answers with the same shape as the listing endpoints.
pub type RestaurantCandidate = RestaurantRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItemRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewRow {
    pub id: i64,
    pub comment: String,
    pub rating: i32,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub created_at: DateTime<Utc>,
}
