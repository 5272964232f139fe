//! Paced HTTP fetcher
//!
//! This module handles every outbound request, including:
//! - Building the shared HTTP client with a browser-like user agent
//! - Attaching a fixed header profile per request kind
//! - Per-host pacing through [`Pacer`]
//! - Error classification (network vs. upstream status)
//!
//! Failed fetches are surfaced immediately; there are no retries.

use crate::config::FetcherConfig;
use crate::fetch::pacer::Pacer;
use crate::DevCardError;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, UPGRADE_INSECURE_REQUESTS,
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;

/// Header set attached to a request
///
/// The user agent itself is a client default; compression is negotiated by
/// the client so responses are decoded transparently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderProfile {
    /// A normal browser navigation, for HTML pages
    Browser,

    /// A JSON API call
    Api,
}

impl HeaderProfile {
    pub fn headers(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match self {
            HeaderProfile::Browser => {
                headers.insert(
                    ACCEPT,
                    HeaderValue::from_static(
                        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
                    ),
                );
                headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
                headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
            }
            HeaderProfile::Api => {
                headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
        }
        headers
    }
}

/// A single outbound request
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: Url,
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub profile: HeaderProfile,
}

impl FetchRequest {
    /// A GET request with the given header profile
    pub fn get(url: Url, profile: HeaderProfile) -> Self {
        Self {
            url,
            method: Method::GET,
            body: None,
            profile,
        }
    }

    /// A POST request carrying a JSON body
    pub fn post_json(url: Url, body: serde_json::Value) -> Self {
        Self {
            url,
            method: Method::POST,
            body: Some(body),
            profile: HeaderProfile::Api,
        }
    }
}

/// A fetched response body and where it came from
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Final URL after redirects
    pub url: String,

    /// HTTP status code (always 2xx)
    pub status: u16,

    /// Response body
    pub body: String,
}

impl RawDocument {
    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DevCardError> {
        serde_json::from_str(&self.body).map_err(|e| DevCardError::Decode {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }
}

/// Builds the HTTP client shared by all requests
///
/// The client keeps no idle connections, so nothing opened for one inbound
/// request is reused by another.
///
/// # Example
///
/// ```
/// use devcard::config::FetcherConfig;
/// use devcard::fetch::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(config.timeout().min(Duration::from_secs(10)))
        .pool_max_idle_per_host(0)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues requests, pacing consecutive calls to the same host
///
/// One fetcher serves one inbound request from start to finish.
#[derive(Debug, Clone)]
pub struct PacedFetcher {
    client: Client,
    pacer: Pacer,
}

impl PacedFetcher {
    pub fn new(client: Client, pacing: Duration) -> Self {
        Self {
            client,
            pacer: Pacer::new(pacing),
        }
    }

    /// Performs a request and returns its body
    ///
    /// # Errors
    ///
    /// * `DevCardError::Network` - timeout, refused connection, or a body
    ///   that could not be read
    /// * `DevCardError::Upstream` - any non-2xx status
    pub async fn fetch(&mut self, request: FetchRequest) -> Result<RawDocument, DevCardError> {
        let host = request.url.host_str().unwrap_or_default().to_string();

        self.pacer.wait_turn(&host).await;
        let result = self.send(request).await;
        self.pacer.record_completion(&host, Instant::now());

        result
    }

    async fn send(&self, request: FetchRequest) -> Result<RawDocument, DevCardError> {
        let url_str = request.url.to_string();
        tracing::debug!("{} {}", request.method, url_str);

        let mut builder = self
            .client
            .request(request.method.clone(), request.url)
            .headers(request.profile.headers());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify_error(&url_str, &e))?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            tracing::debug!("{} returned HTTP {}", url_str, status.as_u16());
            return Err(DevCardError::Upstream {
                url: url_str,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_error(&url_str, &e))?;

        Ok(RawDocument {
            url: final_url,
            status: status.as_u16(),
            body,
        })
    }

    /// Convenience wrapper for a paced GET
    pub async fn get(
        &mut self,
        url: Url,
        profile: HeaderProfile,
    ) -> Result<RawDocument, DevCardError> {
        self.fetch(FetchRequest::get(url, profile)).await
    }

    /// Convenience wrapper for a paced JSON POST
    pub async fn post_json(
        &mut self,
        url: Url,
        body: serde_json::Value,
    ) -> Result<RawDocument, DevCardError> {
        self.fetch(FetchRequest::post_json(url, body)).await
    }
}

/// Maps a transport-level failure to a network error
fn classify_error(url: &str, error: &reqwest::Error) -> DevCardError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    };

    DevCardError::Network {
        url: url.to_string(),
        message,
    }
}
