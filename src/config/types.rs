use serde::Deserialize;
use std::time::Duration;

/// Browser-like user agent sent with every upstream request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for devcard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

/// HTTP surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Base URLs of every upstream the aggregator talks to
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// GitHub REST API root
    #[serde(rename = "github-api-url", default = "default_github_api_url")]
    pub github_api_url: String,

    /// Root of GitHub's public HTML pages
    #[serde(rename = "github-web-url", default = "default_github_web_url")]
    pub github_web_url: String,

    /// LeetCode GraphQL endpoint
    #[serde(
        rename = "leetcode-graphql-url",
        default = "default_leetcode_graphql_url"
    )]
    pub leetcode_graphql_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            github_web_url: default_github_web_url(),
            leetcode_graphql_url: default_leetcode_graphql_url(),
        }
    }
}

/// Outbound request behavior
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Per-request timeout budget (milliseconds)
    #[serde(rename = "timeout-ms", default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Minimum time between two requests to the same host (milliseconds)
    #[serde(rename = "pacing-ms", default = "default_pacing_ms")]
    pub pacing_ms: u64,

    /// User agent presented to upstreams
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            pacing_ms: default_pacing_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Text generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    /// Generative Language API root
    #[serde(rename = "base-url", default = "default_summarizer_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; falls back to `GEMINI_API_KEY` when absent
    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,

    /// Budget for one generation call (milliseconds)
    #[serde(rename = "timeout-ms", default = "default_summarizer_timeout_ms")]
    pub timeout_ms: u64,
}

impl SummarizerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            base_url: default_summarizer_base_url(),
            model: default_model(),
            api_key: None,
            timeout_ms: default_summarizer_timeout_ms(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_github_web_url() -> String {
    "https://github.com".to_string()
}

fn default_leetcode_graphql_url() -> String {
    "https://leetcode.com/graphql/".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_pacing_ms() -> u64 {
    1_000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_summarizer_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_summarizer_timeout_ms() -> u64 {
    30_000
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}
