use crate::api::{GitHubUser, MatchedUser};
use crate::profile::stats::{language_breakdown, LanguageShare};
use crate::scrape::{Contributions, LanguageHistogram, PinnedRepo};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which best-effort facts were actually extracted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapingStatus {
    /// Contribution headline was found on the profile page
    pub profile_scraped: bool,

    /// At least one pinned repository was found
    pub pinned_repos_found: bool,

    /// At least one language label was found
    pub languages_found: bool,
}

/// The merged profile for one GitHub user
///
/// `user_data` comes from the REST API and is never altered by scraped
/// data; every other field is additive and independently optional.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedProfile {
    pub user_data: GitHubUser,
    pub pinned_repos: Vec<PinnedRepo>,
    pub language_summary: Vec<LanguageShare>,
    pub join_date: DateTime<Utc>,
    pub contributions_this_year: String,
    pub languages_count: LanguageHistogram,
    pub scraping_status: ScrapingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leetcode: Option<MatchedUser>,
}

impl AggregatedProfile {
    /// Merges the authoritative record with the scraped facts
    pub fn assemble(
        user_data: GitHubUser,
        contributions: Contributions,
        pinned_repos: Vec<PinnedRepo>,
        languages: LanguageHistogram,
    ) -> Self {
        let scraping_status = ScrapingStatus {
            profile_scraped: contributions.is_found(),
            pinned_repos_found: !pinned_repos.is_empty(),
            languages_found: !languages.is_empty(),
        };

        Self {
            join_date: user_data.created_at,
            language_summary: language_breakdown(&languages),
            contributions_this_year: contributions.text().to_string(),
            languages_count: languages,
            pinned_repos,
            scraping_status,
            user_data,
            leetcode: None,
        }
    }

    /// Attaches a LeetCode profile
    pub fn with_leetcode(mut self, leetcode: MatchedUser) -> Self {
        self.leetcode = Some(leetcode);
        self
    }
}
