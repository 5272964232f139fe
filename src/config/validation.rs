use crate::config::types::{Config, FetcherConfig, ServerConfig, SummarizerConfig, UpstreamConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Longest self-imposed delay between two requests to one host
const MAX_PACING_MS: u64 = 60_000;

/// Shortest timeout budget that still leaves room for a TLS handshake
const MIN_TIMEOUT_MS: u64 = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_upstream_config(&config.upstream)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_summarizer_config(&config.summarizer)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!("bind must be a socket address, got '{}': {}", config.bind, e))
    })?;
    Ok(())
}

fn validate_upstream_config(config: &UpstreamConfig) -> Result<(), ConfigError> {
    validate_http_url("github-api-url", &config.github_api_url)?;
    validate_http_url("github-web-url", &config.github_web_url)?;
    validate_http_url("leetcode-graphql-url", &config.leetcode_graphql_url)?;
    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_ms < MIN_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "timeout-ms must be >= {}ms, got {}ms",
            MIN_TIMEOUT_MS, config.timeout_ms
        )));
    }

    if config.pacing_ms > MAX_PACING_MS {
        return Err(ConfigError::Validation(format!(
            "pacing-ms must be <= {}ms, got {}ms",
            MAX_PACING_MS, config.pacing_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_summarizer_config(config: &SummarizerConfig) -> Result<(), ConfigError> {
    validate_http_url("summarizer base-url", &config.base_url)?;

    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation("model cannot be empty".to_string()));
    }

    if config.timeout_ms < MIN_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "summarizer timeout-ms must be >= {}ms, got {}ms",
            MIN_TIMEOUT_MS, config.timeout_ms
        )));
    }

    Ok(())
}

/// Validates that a configured upstream is an absolute http(s) URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            field, value
        )));
    }

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(format!(
            "{} cannot be used as a base URL: '{}'",
            field, value
        )));
    }

    Ok(())
}
