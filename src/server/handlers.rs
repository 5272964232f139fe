use crate::api::MatchedUser;
use crate::profile::AggregatedProfile;
use crate::server::{ApiError, AppState};
use crate::DevCardError;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Query string of the summary endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub github_username: Option<String>,
    pub leetcode_username: Option<String>,
}

impl SummaryQuery {
    /// Both handles, trimmed; `None` if either is missing or blank
    fn handles(&self) -> Option<(&str, &str)> {
        let github = self.github_username.as_deref().map(str::trim)?;
        let leetcode = self.leetcode_username.as_deref().map(str::trim)?;
        if github.is_empty() || leetcode.is_empty() {
            return None;
        }
        Some((github, leetcode))
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

pub async fn hello() -> &'static str {
    "hello"
}

pub async fn github_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<AggregatedProfile>, ApiError> {
    match state.aggregator.aggregate(&username, None).await {
        Ok(profile) => Ok(Json(profile)),
        Err(e) => {
            tracing::error!("Error fetching GitHub profile for {}: {}", username, e);
            Err(ApiError::GitHubNotFound)
        }
    }
}

pub async fn leetcode_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<MatchedUser>, ApiError> {
    match state.aggregator.leetcode_user(&username).await {
        Ok(user) => Ok(Json(user)),
        Err(DevCardError::NotFound(what)) => {
            tracing::info!("Not found: {}", what);
            Err(ApiError::LeetCodeNotFound)
        }
        Err(e) => {
            tracing::error!("LeetCode API error for {}: {}", username, e);
            Err(ApiError::LeetCodeFailed)
        }
    }
}

pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let (github_username, leetcode_username) =
        query.handles().ok_or(ApiError::MissingUsernames)?;

    let result = async {
        let github = state.aggregator.github_user(github_username).await?;
        let leetcode = state.aggregator.leetcode_user(leetcode_username).await?;
        state.summarizer.summarize(&github, &leetcode).await
    }
    .await;

    match result {
        Ok(summary) => Ok(Json(SummaryResponse { summary })),
        Err(e) => {
            tracing::error!("Error generating summary: {}", e);
            Err(ApiError::SummaryFailed)
        }
    }
}
