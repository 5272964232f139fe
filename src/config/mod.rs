//! Configuration module for devcard
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing keys fall back to the public upstreams
//! and the default pacing profile.
//!
//! # Example
//!
//! ```no_run
//! use devcard::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("devcard.toml")).unwrap();
//! println!("Pacing between scrapes: {}ms", config.fetcher.pacing_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, ServerConfig, SummarizerConfig, UpstreamConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
