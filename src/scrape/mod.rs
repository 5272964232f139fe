//! Profile scraping against GitHub's public HTML pages
//!
//! Three independent operations, each fetch -> parse -> strategy chain ->
//! post-process:
//! - Language histogram from the repositories tab
//! - Pinned repositories from the profile page
//! - Contribution headline from the profile page
//!
//! Every operation is fault-isolated: a fetch failure is logged and turned
//! into an empty value, never propagated to the caller.

mod contributions;
mod languages;
mod pinned;

pub use contributions::{
    parse_contributions, Contributions, CONTRIBUTIONS_MISSING, CONTRIBUTIONS_UNAVAILABLE,
    CONTRIBUTION_FALLBACK, CONTRIBUTION_STRATEGIES,
};
pub use languages::{parse_languages, LanguageHistogram, LANGUAGE_STRATEGIES};
pub use pinned::{
    parse_pinned, PinnedCard, PinnedRepo, NO_DESCRIPTION, NO_LANGUAGE, PINNED_STRATEGIES,
};

use crate::fetch::{endpoint, HeaderProfile, PacedFetcher, RawDocument};
use crate::DevCardError;

/// Pages of a GitHub profile the scraper reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePage {
    /// `/{user}`
    Overview,

    /// `/{user}?tab=repositories`
    Repositories,
}

/// Scrapes best-effort facts from a user's public profile pages
#[derive(Debug, Clone)]
pub struct ProfileScraper {
    web_base: String,
}

impl ProfileScraper {
    pub fn new(web_base: impl Into<String>) -> Self {
        Self {
            web_base: web_base.into(),
        }
    }

    /// Builds the URL of one profile page
    pub fn page_url(&self, username: &str, page: ProfilePage) -> Result<url::Url, DevCardError> {
        let mut url = endpoint(&self.web_base, &[username])?;
        if page == ProfilePage::Repositories {
            url.query_pairs_mut().append_pair("tab", "repositories");
        }
        Ok(url)
    }

    async fn fetch_page(
        &self,
        fetcher: &mut PacedFetcher,
        username: &str,
        page: ProfilePage,
    ) -> Result<RawDocument, DevCardError> {
        let url = self.page_url(username, page)?;
        tracing::info!("Scraping {}", url);
        let document = fetcher.get(url, HeaderProfile::Browser).await?;
        tracing::debug!(
            "Fetched {} (HTTP {}, {} bytes)",
            document.url,
            document.status,
            document.body.len()
        );
        Ok(document)
    }

    /// Language histogram; empty when the page cannot be fetched
    pub async fn languages(&self, fetcher: &mut PacedFetcher, username: &str) -> LanguageHistogram {
        match self
            .fetch_page(fetcher, username, ProfilePage::Repositories)
            .await
        {
            Ok(document) => parse_languages(&document.body),
            Err(e) => {
                tracing::warn!("Error scraping repository languages for {}: {}", username, e);
                LanguageHistogram::default()
            }
        }
    }

    /// Pinned repositories; empty when the page cannot be fetched
    pub async fn pinned_repos(&self, fetcher: &mut PacedFetcher, username: &str) -> Vec<PinnedRepo> {
        match self
            .fetch_page(fetcher, username, ProfilePage::Overview)
            .await
        {
            Ok(document) => parse_pinned(&document.body, username),
            Err(e) => {
                tracing::warn!("Error scraping pinned repos for {}: {}", username, e);
                Vec::new()
            }
        }
    }

    /// Contribution headline; `Unavailable` when the page cannot be fetched
    pub async fn contributions(&self, fetcher: &mut PacedFetcher, username: &str) -> Contributions {
        match self
            .fetch_page(fetcher, username, ProfilePage::Overview)
            .await
        {
            Ok(document) => parse_contributions(&document.body),
            Err(e) => {
                tracing::warn!("Error scraping contributions for {}: {}", username, e);
                Contributions::Unavailable
            }
        }
    }
}
