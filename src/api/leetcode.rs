//! LeetCode GraphQL client
//!
//! One fixed GraphQL document, parameterized only by username. An empty
//! `matchedUser` is a domain failure ("user not found"), distinct from a
//! transport or upstream failure.

use crate::fetch::PacedFetcher;
use crate::DevCardError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

/// GraphQL operation name sent with every query
pub const OPERATION_NAME: &str = "getUserProfile";

/// The profile query
pub const PROFILE_QUERY: &str = r#"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile {
      realName
      userAvatar
      ranking
      countryName
      starRating
      skillTags
      birthday
      jobTitle
    }
    submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
        submissions
      }
    }
    badges {
      id
      displayName
      icon
      creationDate
    }
    userCalendar {
      streak
      totalActiveDays
      submissionCalendar
    }
    languageProblemCount {
      languageName
      problemsSolved
    }
  }
}
"#;

/// A LeetCode user as returned by `matchedUser`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub username: String,
    #[serde(default)]
    pub profile: Option<LeetCodeProfile>,
    #[serde(default)]
    pub submit_stats_global: Option<SubmitStats>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub user_calendar: Option<UserCalendar>,
    #[serde(default)]
    pub language_problem_count: Vec<LanguageProblemCount>,
}

impl MatchedUser {
    /// Accepted-submission counts, empty when the stats block is absent
    pub fn ac_submissions(&self) -> &[DifficultyCount] {
        self.submit_stats_global
            .as_ref()
            .map(|stats| stats.ac_submission_num.as_slice())
            .unwrap_or_default()
    }

    /// Global ranking, if LeetCode reported one
    pub fn ranking(&self) -> Option<i64> {
        self.profile.as_ref().and_then(|profile| profile.ranking)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeProfile {
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub ranking: Option<i64>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub star_rating: Option<f64>,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<DifficultyCount>,
}

/// Solved-problem count for one difficulty label ("All", "Easy", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: u32,
    #[serde(default)]
    pub submissions: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCalendar {
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub total_active_days: u32,
    /// JSON-encoded map of unix day -> submission count, passed through as text
    #[serde(default)]
    pub submission_calendar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProblemCount {
    pub language_name: String,
    pub problems_solved: u32,
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<GraphQlData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlData {
    #[serde(default)]
    matched_user: Option<MatchedUser>,
}

/// Typed access to LeetCode's GraphQL endpoint
#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    graphql_url: String,
}

impl LeetCodeClient {
    pub fn new(graphql_url: impl Into<String>) -> Self {
        Self {
            graphql_url: graphql_url.into(),
        }
    }

    /// Builds the GraphQL request body for `username`
    pub fn request_body(username: &str) -> serde_json::Value {
        json!({
            "operationName": OPERATION_NAME,
            "variables": { "username": username },
            "query": PROFILE_QUERY,
        })
    }

    /// Fetches the matched user for `username`
    ///
    /// # Errors
    ///
    /// * `DevCardError::NotFound` - LeetCode has no user with that handle
    /// * any fetch or decode error otherwise
    pub async fn fetch_user(
        &self,
        fetcher: &mut PacedFetcher,
        username: &str,
    ) -> Result<MatchedUser, DevCardError> {
        let url = Url::parse(&self.graphql_url)
            .map_err(|e| DevCardError::InvalidUrl(format!("{}: {}", self.graphql_url, e)))?;

        let document = fetcher
            .post_json(url, Self::request_body(username))
            .await?;
        let envelope: GraphQlEnvelope = document.json()?;

        envelope
            .data
            .and_then(|data| data.matched_user)
            .ok_or_else(|| DevCardError::NotFound(format!("LeetCode user '{}'", username)))
    }
}
