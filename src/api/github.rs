//! GitHub REST client
//!
//! The user record from `/users/{username}` is the authoritative identity
//! for a profile: any failure to obtain it fails the whole request.

use crate::fetch::{endpoint, HeaderProfile, PacedFetcher};
use crate::DevCardError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GitHub user record from the `/users/{username}` API
///
/// Fields the aggregator reads are typed; every other field of the upstream
/// record is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GitHubUser {
    /// Display name, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// Typed access to the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Fetches the canonical user record
    ///
    /// # Errors
    ///
    /// Network failures, non-2xx statuses and undecodable bodies are all
    /// returned as-is; the caller decides how to present them.
    pub async fn fetch_user(
        &self,
        fetcher: &mut PacedFetcher,
        username: &str,
    ) -> Result<GitHubUser, DevCardError> {
        let url = endpoint(&self.api_base, &["users", username])?;
        let document = fetcher.get(url, HeaderProfile::Api).await?;
        document.json()
    }
}
