//! Profile aggregation
//!
//! The aggregator runs one request start to finish:
//! 1. Fetch the GitHub user record (mandatory; failure ends the request)
//! 2. Scrape contributions, pinned repositories and languages, paced per host
//! 3. Fetch the LeetCode profile when a handle was given
//! 4. Merge everything and derive the language breakdown
//!
//! The calls are issued sequentially. The scrapes hit the same host, and
//! spacing them out is what keeps the session from being throttled.

mod stats;
mod types;

pub use stats::{language_breakdown, LanguageShare};
pub use types::{AggregatedProfile, ScrapingStatus};

use crate::api::{GitHubClient, GitHubUser, LeetCodeClient, MatchedUser};
use crate::config::Config;
use crate::fetch::PacedFetcher;
use crate::scrape::ProfileScraper;
use crate::DevCardError;
use reqwest::Client;
use std::time::Duration;

/// Orchestrates upstream calls for one profile
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: Client,
    pacing: Duration,
    github: GitHubClient,
    leetcode: LeetCodeClient,
    scraper: ProfileScraper,
}

impl Aggregator {
    /// Creates an aggregator sharing `client` across requests
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            pacing: config.fetcher.pacing(),
            github: GitHubClient::new(config.upstream.github_api_url.clone()),
            leetcode: LeetCodeClient::new(config.upstream.leetcode_graphql_url.clone()),
            scraper: ProfileScraper::new(config.upstream.github_web_url.clone()),
        }
    }

    /// A fresh fetcher with its own pacing state, for one inbound request
    pub fn session(&self) -> PacedFetcher {
        PacedFetcher::new(self.client.clone(), self.pacing)
    }

    /// Builds the aggregated profile
    ///
    /// # Arguments
    ///
    /// * `github_username` - GitHub login; mandatory
    /// * `leetcode_username` - LeetCode handle to attach, if any
    ///
    /// # Errors
    ///
    /// * `DevCardError::NotFound` - the GitHub record could not be fetched;
    ///   no scraping is attempted in that case
    /// * any LeetCode error when a handle was given
    ///
    /// Scrape failures never fail the aggregation.
    pub async fn aggregate(
        &self,
        github_username: &str,
        leetcode_username: Option<&str>,
    ) -> Result<AggregatedProfile, DevCardError> {
        tracing::info!("Processing GitHub profile for: {}", github_username);
        let mut fetcher = self.session();

        let user_data = self
            .github
            .fetch_user(&mut fetcher, github_username)
            .await
            .map_err(|e| {
                tracing::warn!("GitHub lookup failed for {}: {}", github_username, e);
                DevCardError::NotFound(format!("GitHub user '{}': {}", github_username, e))
            })?;

        let contributions = self
            .scraper
            .contributions(&mut fetcher, github_username)
            .await;
        let pinned_repos = self
            .scraper
            .pinned_repos(&mut fetcher, github_username)
            .await;
        let languages = self.scraper.languages(&mut fetcher, github_username).await;

        let mut profile =
            AggregatedProfile::assemble(user_data, contributions, pinned_repos, languages);

        if let Some(handle) = leetcode_username {
            let leetcode = self.leetcode.fetch_user(&mut fetcher, handle).await?;
            profile = profile.with_leetcode(leetcode);
        }

        tracing::info!(
            "Aggregated {}: {} pinned, {} languages, status {:?}",
            github_username,
            profile.pinned_repos.len(),
            profile.languages_count.len(),
            profile.scraping_status
        );

        Ok(profile)
    }

    /// Fetches only the GitHub user record
    pub async fn github_user(&self, username: &str) -> Result<GitHubUser, DevCardError> {
        self.github.fetch_user(&mut self.session(), username).await
    }

    /// Fetches only the LeetCode profile
    pub async fn leetcode_user(&self, username: &str) -> Result<MatchedUser, DevCardError> {
        self.leetcode.fetch_user(&mut self.session(), username).await
    }
}
