//! Rate-limited HTTP client for the Vercel API

use reqwest::{header, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::errors::{ErrorCode, ErrorEnvelope, VercelError};
use super::rate_limiter::TokenBucketRateLimiter;
use super::request::ApiRequest;
use crate::domain::models::Config;
use crate::infrastructure::logging::SecretScrubber;

/// Longest slice of a raw error body echoed into an error message
const MAX_RAW_ERROR_CHARS: usize = 200;

/// Configuration for the Vercel HTTP client
#[derive(Clone)]
pub struct VercelClientConfig {
    /// Bearer token used for every request
    pub token: String,

    /// Base URL for the Vercel API
    pub base_url: String,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// Minimum spacing between requests
    pub rate_limit_interval: Duration,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VercelClientConfig {
    fn default() -> Self {
        Self {
            token: std::env::var("VERCEL_TOKEN").unwrap_or_default(),
            base_url: "https://api.vercel.com".to_string(),
            user_agent: "terraform-provider-vercel".to_string(),
            rate_limit_interval: Duration::from_millis(800),
            timeout_secs: 30,
        }
    }
}

impl From<&Config> for VercelClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            token: config.api.token.clone(),
            base_url: config.api.base_url.clone(),
            user_agent: config.api.user_agent.clone(),
            rate_limit_interval: Duration::from_millis(config.rate_limit.interval_ms),
            timeout_secs: config.api.timeout_secs,
        }
    }
}

impl fmt::Debug for VercelClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VercelClientConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("rate_limit_interval", &self.rate_limit_interval)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Rate-limited HTTP client for the Vercel REST API
///
/// Every call, whatever its outcome, first takes a token from a single
/// shared limiter. Share one instance behind an `Arc` across all resource
/// handlers so the pacing is global.
pub struct VercelClient {
    http_client: ReqwestClient,
    base_url: String,
    rate_limiter: TokenBucketRateLimiter,
    scrubber: SecretScrubber,
}

impl VercelClient {
    /// Create a new Vercel API client
    ///
    /// # Example
    /// ```no_run
    /// use vercel_provider::infrastructure::vercel::{VercelClient, VercelClientConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = VercelClient::new(VercelClientConfig {
    ///     token: "my-token".to_string(),
    ///     ..Default::default()
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: VercelClientConfig) -> Result<Self, VercelError> {
        let token_scrubbed = if config.token.len() > 8 {
            let prefix: String = config.token.chars().take(4).collect();
            format!("{prefix}...[REDACTED]")
        } else {
            "[REDACTED]".to_string()
        };

        info!(
            "Initializing Vercel API client: base_url={}, interval={:?}, timeout={}s, token={}",
            config.base_url, config.rate_limit_interval, config.timeout_secs, token_scrubbed
        );

        reqwest::Url::parse(&config.base_url).map_err(|e| {
            VercelError::InvalidConfig(format!("invalid base URL {}: {e}", config.base_url))
        })?;

        let mut authorization =
            header::HeaderValue::from_str(&format!("Bearer {}", config.token)).map_err(|e| {
                VercelError::InvalidConfig(format!("token is not a valid header value: {e}"))
            })?;
        authorization.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .map_err(VercelError::Transport)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limiter: TokenBucketRateLimiter::new(config.rate_limit_interval)?,
            scrubber: SecretScrubber::new(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and decode a 2xx body into `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<T, VercelError> {
        let body = self.send(request, cancel).await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Response body did not match the expected shape: {}", e);
            VercelError::Decode(e)
        })
    }

    /// Send a request whose response body is not needed
    pub async fn execute(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<(), VercelError> {
        self.send(request, cancel).await.map(drop)
    }

    #[instrument(skip_all, fields(method = %request.method(), path = %request.path()))]
    async fn send(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, VercelError> {
        self.rate_limiter.acquire(cancel).await?;

        let ApiRequest {
            method,
            path,
            query,
            body,
        } = request;
        let body = body.transpose().map_err(VercelError::Serialization)?;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut builder = self.http_client.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(self.api_error(status, &bytes));
        }

        Ok(bytes.to_vec())
    }

    /// Classify a non-2xx response
    fn api_error(&self, status: StatusCode, body: &[u8]) -> VercelError {
        let envelope = ErrorEnvelope::decode(body);
        let code = ErrorCode::parse(&envelope.error.code);

        let message = if envelope.error.message.is_empty() {
            let raw: String = String::from_utf8_lossy(body)
                .trim()
                .chars()
                .take(MAX_RAW_ERROR_CHARS)
                .collect();
            if raw.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                self.scrubber.scrub_message(&raw)
            }
        } else {
            self.scrubber.scrub_message(&envelope.error.message)
        };

        warn!("API error ({}, {}): {}", status, code, message);

        VercelError::Api {
            status,
            code,
            message,
        }
    }
}
