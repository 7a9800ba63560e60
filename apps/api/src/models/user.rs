use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user as read back from the store. The password hash column is never selected.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub age: Option<i32>,
    /// Comma-joined list written by the preferences update.
    pub favorite_places: Option<String>,
    pub favorite_cuisines: Option<String>,
    pub allergens: Option<String>,
}

/// Column list shared by every query that returns a `UserRow`.
pub const USER_COLUMNS: &str =
    "id, name, email, age, favorite_places, favorite_cuisines, allergens";
