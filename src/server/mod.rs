//! HTTP surface
//!
//! Routes:
//! - `GET /` liveness
//! - `GET /api/github/:username` aggregated profile
//! - `GET /api/leetcode/:username` raw LeetCode profile
//! - `GET /api/gemini/summary?githubUsername=&leetcodeUsername=` summary
//!
//! Shared state is immutable: the HTTP client handle, the upstream
//! settings and the text generator. Pacing state lives in a fresh fetcher
//! per inbound request.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{SummaryQuery, SummaryResponse};

use crate::config::Config;
use crate::fetch::build_http_client;
use crate::profile::Aggregator;
use crate::summary::{GeminiClient, Summarizer, TextGenerator};
use crate::DevCardError;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub aggregator: Aggregator,
    pub summarizer: Summarizer,
}

impl AppState {
    /// Builds state backed by the Gemini API
    pub fn new(config: &Config) -> Result<Self, DevCardError> {
        let generator = GeminiClient::new(&config.summarizer)?;
        Self::with_generator(config, Arc::new(generator))
    }

    /// Builds state around a caller-supplied text generator
    pub fn with_generator(
        config: &Config,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, DevCardError> {
        let client = build_http_client(&config.fetcher)?;
        Ok(Self {
            aggregator: Aggregator::new(config, client),
            summarizer: Summarizer::new(generator),
        })
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/api/github/:username", get(handlers::github_profile))
        .route("/api/leetcode/:username", get(handlers::leetcode_profile))
        .route("/api/gemini/summary", get(handlers::summary))
        .with_state(state)
}

/// Serves the router on an already-bound listener until the process exits
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), DevCardError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Server started on {}", addr);
    }
    axum::serve(listener, router(state)).await?;
    Ok(())
}
