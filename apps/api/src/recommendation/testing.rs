//! In-memory doubles for the store and the generation service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::llm_client::LlmError;
use crate::models::restaurant::RestaurantCandidate;
use crate::models::user::UserRow;
use crate::recommendation::client::RecommendationGenerator;
use crate::recommendation::prompts::RecommendationPrompt;
use crate::store::RestaurantStore;

pub fn make_user(id: i64, places: &str, cuisines: &str, allergens: &str) -> UserRow {
    UserRow {
        id,
        name: Some(format!("User {id}")),
        email: format!("user{id}@example.com"),
        age: Some(30),
        favorite_places: Some(places.to_string()),
        favorite_cuisines: Some(cuisines.to_string()),
        allergens: Some(allergens.to_string()),
    }
}

pub fn make_candidate(
    id: i64,
    name: &str,
    area: &str,
    cuisine: &str,
    allergens: &str,
) -> RestaurantCandidate {
    RestaurantCandidate {
        id,
        name: name.to_string(),
        latitude: 40.0 + id as f64,
        longitude: -74.0,
        street: format!("{id} Main St"),
        city: "Springfield".to_string(),
        area: area.to_string(),
        allergens: allergens.to_string(),
        cuisine_id: id * 10,
        cuisine: cuisine.to_string(),
    }
}

pub fn luigis() -> RestaurantCandidate {
    make_candidate(1, "Luigi's", "Downtown", "Italian", "")
}

pub fn sushi_go() -> RestaurantCandidate {
    make_candidate(2, "Sushi Go", "Uptown", "Japanese", "shellfish")
}

pub struct InMemoryStore {
    users: Vec<UserRow>,
    restaurants: Vec<RestaurantCandidate>,
    fail_listing: bool,
    list_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(users: Vec<UserRow>, restaurants: Vec<RestaurantCandidate>) -> Self {
        Self {
            users,
            restaurants,
            fail_listing: false,
            list_calls: AtomicUsize::new(0),
        }
    }

    /// A store whose restaurant listing fails with a database error.
    pub fn failing_listing(users: Vec<UserRow>) -> Self {
        Self {
            fail_listing: true,
            ..Self::new(users, vec![])
        }
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserRow>, sqlx::Error> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn list_restaurants_with_cuisine(
        &self,
    ) -> Result<Vec<RestaurantCandidate>, sqlx::Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.restaurants.clone())
    }
}

pub enum Script {
    Reply(String),
    Fail,
    Hang,
}

/// A generator that plays back a fixed script and records what it was asked.
pub struct ScriptedGenerator {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Script::Reply(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecommendationGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &RecommendationPrompt) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.as_str().to_string());

        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail => Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
                Ok("Luigi's".to_string())
            }
        }
    }
}
