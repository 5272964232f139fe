//! Outbound HTTP
//!
//! This module contains:
//! - The shared HTTP client builder
//! - A paced fetcher that spaces out requests to the same host
//! - The pacer scheduling primitive itself
//! - Upstream URL construction helpers

mod fetcher;
mod pacer;

pub use fetcher::{build_http_client, FetchRequest, HeaderProfile, PacedFetcher, RawDocument};
pub use pacer::Pacer;

use crate::DevCardError;
use url::Url;

/// Appends percent-encoded path segments to a base URL
///
/// # Example
///
/// ```
/// use devcard::fetch::endpoint;
///
/// let url = endpoint("https://api.github.com", &["users", "octo cat"]).unwrap();
/// assert_eq!(url.as_str(), "https://api.github.com/users/octo%20cat");
/// ```
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, DevCardError> {
    let mut url =
        Url::parse(base).map_err(|e| DevCardError::InvalidUrl(format!("{}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| DevCardError::InvalidUrl(format!("{} cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
