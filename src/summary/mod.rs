//! Natural-language profile summaries
//!
//! The model is an external collaborator behind [`TextGenerator`]: text in,
//! text out, may fail. Everything upstream of the call (fact selection and
//! prompt layout) is deterministic.

mod gemini;
mod prompt;

pub use gemini::{GeminiClient, API_KEY_ENV};
pub use prompt::{build_prompt, DifficultyCounts};

use crate::api::{GitHubUser, MatchedUser};
use crate::DevCardError;
use async_trait::async_trait;
use std::sync::Arc;

/// A text-generation backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`
    ///
    /// # Errors
    ///
    /// Returns `DevCardError::Summarization` on any backend failure,
    /// including an empty result.
    async fn generate(&self, prompt: &str) -> Result<String, DevCardError>;
}

/// Turns GitHub and LeetCode facts into a one-paragraph summary
#[derive(Clone)]
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer").finish_non_exhaustive()
    }
}

impl Summarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Summarizes one developer
    pub async fn summarize(
        &self,
        github: &GitHubUser,
        leetcode: &MatchedUser,
    ) -> Result<String, DevCardError> {
        let prompt = build_prompt(github, leetcode);
        tracing::info!(
            "Generating summary for {} / {}",
            github.login,
            leetcode.username
        );

        self.generator.generate(&prompt).await.map_err(|e| match e {
            DevCardError::Summarization(_) => e,
            other => DevCardError::Summarization(other.to_string()),
        })
    }
}
