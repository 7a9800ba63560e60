//! Recommendation pipeline — runs one request end to end.
//!
//! Flow: fetch user → fetch candidates → format → build prompt → await upstream → resolve.
//! Each stage gates the next; any failure ends the request without a partial result.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::models::restaurant::RestaurantCandidate;
use crate::recommendation::client::RecommendationGenerator;
use crate::recommendation::formatter::format_candidates;
use crate::recommendation::preferences::extract_preferences;
use crate::recommendation::prompts::build_prompt;
use crate::recommendation::resolver::{parse_recommended_names, resolve_recommendations};
use crate::store::RestaurantStore;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("No restaurants available to recommend")]
    EmptyCandidateSet,

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Recommendation service failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Recommendation service timed out after {0:?}")]
    UpstreamTimeout(Duration),
}

impl RecommendationError {
    /// True for failures of the external generation service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            RecommendationError::Upstream(_) | RecommendationError::UpstreamTimeout(_)
        )
    }
}

impl From<RecommendationError> for AppError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::InvalidInput(msg) => AppError::Validation(msg),
            e @ RecommendationError::UserNotFound(_) => AppError::NotFound(e.to_string()),
            RecommendationError::EmptyCandidateSet => {
                AppError::NotFound("Restaurants not found".to_string())
            }
            RecommendationError::Store(e) => AppError::Database(e),
            e @ (RecommendationError::Upstream(_) | RecommendationError::UpstreamTimeout(_)) => {
                AppError::Upstream(e.to_string())
            }
        }
    }
}

/// Where a request was when it stopped. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    FetchingUser,
    FetchingCandidates,
    Formatting,
    Prompting,
    AwaitingUpstream,
    Resolving,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::FetchingUser => "fetching_user",
            Stage::FetchingCandidates => "fetching_candidates",
            Stage::Formatting => "formatting",
            Stage::Prompting => "prompting",
            Stage::AwaitingUpstream => "awaiting_upstream",
            Stage::Resolving => "resolving",
        };
        f.write_str(name)
    }
}

/// Recommends restaurants for `user_id`.
///
/// `upstream_timeout` bounds the generation call; elapsing it is an upstream failure.
/// An empty vector means the model matched nothing, which is a success.
pub async fn recommend_for_user(
    store: &dyn RestaurantStore,
    generator: &dyn RecommendationGenerator,
    user_id: i64,
    upstream_timeout: Duration,
) -> Result<Vec<RestaurantCandidate>, RecommendationError> {
    let span = info_span!("recommend", request_id = %Uuid::new_v4(), user_id);
    run_pipeline(store, generator, user_id, upstream_timeout)
        .instrument(span)
        .await
}

async fn run_pipeline(
    store: &dyn RestaurantStore,
    generator: &dyn RecommendationGenerator,
    user_id: i64,
    upstream_timeout: Duration,
) -> Result<Vec<RestaurantCandidate>, RecommendationError> {
    let mut stage = Stage::FetchingUser;
    let result = async {
        let profile = extract_preferences(store, user_id).await?;

        stage = Stage::FetchingCandidates;
        let candidates = store.list_restaurants_with_cuisine().await?;

        stage = Stage::Formatting;
        let formatted = format_candidates(&candidates)?;

        stage = Stage::Prompting;
        let prompt = build_prompt(&profile, &formatted);
        info!("Prompting with {} candidate restaurants", candidates.len());

        stage = Stage::AwaitingUpstream;
        let raw = tokio::time::timeout(upstream_timeout, generator.generate(&prompt))
            .await
            .map_err(|_| RecommendationError::UpstreamTimeout(upstream_timeout))??;

        stage = Stage::Resolving;
        let resolved = resolve_recommendations(&raw, &candidates);
        info!(
            "Resolved {} of {} recommended names",
            resolved.len(),
            parse_recommended_names(&raw).len()
        );
        Ok::<_, RecommendationError>(resolved)
    }
    .await;

    match &result {
        Err(e) if e.is_upstream() => error!("Recommendation failed while {stage}: {e}"),
        Err(e) => warn!("Recommendation failed while {stage}: {e}"),
        Ok(_) => {}
    }
    result
}
