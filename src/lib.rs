//! devcard: a developer profile aggregator
//!
//! This crate merges a developer's GitHub REST record, facts scraped from
//! GitHub's public HTML pages, and LeetCode's GraphQL profile into one
//! record, degrading gracefully whenever scraping fails.

pub mod api;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod profile;
pub mod scrape;
pub mod server;
pub mod summary;

use thiserror::Error;

/// Main error type for devcard operations
#[derive(Debug, Error)]
pub enum DevCardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Upstream returned HTTP {status} for {url}")]
    Upstream { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for devcard operations
pub type Result<T> = std::result::Result<T, DevCardError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use profile::{AggregatedProfile, Aggregator, ScrapingStatus};
pub use summary::{Summarizer, TextGenerator};
