//! devcard main entry point
//!
//! Command-line interface for the developer profile aggregator.

use anyhow::Context;
use clap::Parser;
use devcard::config::{load_config_with_hash, validate, Config};
use devcard::server::{serve, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// devcard: a developer profile aggregator
///
/// devcard merges a GitHub account, facts scraped from its public profile
/// pages, and a LeetCode profile into one JSON record, and serves the
/// result over HTTP.
#[derive(Parser, Debug)]
#[command(name = "devcard")]
#[command(version = "1.0.0")]
#[command(about = "A developer profile aggregator", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Address to listen on; overrides the config file and PORT
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Validate config and print the effective settings without serving
    #[arg(long, conflicts_with = "profile")]
    dry_run: bool,

    /// Aggregate one GitHub profile, print it as JSON and exit
    #[arg(long, value_name = "USER")]
    profile: Option<String>,

    /// LeetCode handle to attach to --profile
    #[arg(long, value_name = "USER", requires = "profile")]
    leetcode: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    apply_bind_overrides(&mut config, std::env::var("PORT").ok(), cli.bind)?;
    validate(&config).context("invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else if let Some(username) = &cli.profile {
        handle_profile(&config, username, cli.leetcode.as_deref()).await?;
    } else {
        handle_serve(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("devcard=info,warn"),
            1 => EnvFilter::new("devcard=debug,info"),
            2 => EnvFilter::new("devcard=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// `PORT` replaces the port of the configured address; `--bind` replaces both
fn apply_bind_overrides(
    config: &mut Config,
    port: Option<String>,
    bind: Option<SocketAddr>,
) -> anyhow::Result<()> {
    if let Some(addr) = bind {
        config.server.bind = addr.to_string();
        return Ok(());
    }

    if let Some(port) = port {
        let port: u16 = port
            .trim()
            .parse()
            .with_context(|| format!("PORT is not a valid port: {:?}", port))?;
        let mut addr: SocketAddr = config
            .server
            .bind
            .parse()
            .with_context(|| format!("invalid bind address {:?}", config.server.bind))?;
        addr.set_port(port);
        config.server.bind = addr.to_string();
    }

    Ok(())
}

/// Handles the --dry-run mode: prints the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== devcard Dry Run ===\n");

    println!("Server:");
    println!("  Bind: {}", config.server.bind);

    println!("\nUpstreams:");
    println!("  GitHub API: {}", config.upstream.github_api_url);
    println!("  GitHub web: {}", config.upstream.github_web_url);
    println!("  LeetCode GraphQL: {}", config.upstream.leetcode_graphql_url);

    println!("\nFetcher:");
    println!("  Timeout: {}ms", config.fetcher.timeout_ms);
    println!("  Pacing: {}ms", config.fetcher.pacing_ms);
    println!("  User agent: {}", config.fetcher.user_agent);

    println!("\nSummarizer:");
    println!("  Base URL: {}", config.summarizer.base_url);
    println!("  Model: {}", config.summarizer.model);
    println!(
        "  API key: {}",
        if config.summarizer.api_key.is_some() {
            "set in config"
        } else {
            "from environment"
        }
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the --profile mode: one aggregation printed as JSON
async fn handle_profile(
    config: &Config,
    username: &str,
    leetcode: Option<&str>,
) -> anyhow::Result<()> {
    let state = AppState::new(config).context("failed to build HTTP client")?;
    let profile = state
        .aggregator
        .aggregate(username, leetcode)
        .await
        .with_context(|| format!("failed to aggregate profile for {}", username))?;

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// Handles the default mode: serve HTTP until killed
async fn handle_serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::new(config).context("failed to build HTTP client")?;
    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;

    serve(listener, state).await.context("server failed")?;
    Ok(())
}
