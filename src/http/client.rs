use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::config::ApiSettings;
use crate::errors::fetch_context;
use crate::rate_limiter::RateLimiter;

/// HTTP client with built-in rate limiting and retries
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
    max_attempts: u32,
}

impl RateLimitedClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Self::build_client(&settings.user_agent, settings.timeout_secs)?;
        let rate_limiter = RateLimiter::new(settings.rate_limit_ms, settings.retry_backoff_ms);

        Ok(Self {
            client,
            rate_limiter,
            max_attempts: settings.max_attempts.max(1),
        })
    }

    /// GET a JSON document, retrying transport errors, 429 and 5xx
    pub async fn get_json(&mut self, url: &str) -> Result<Value> {
        let mut attempt = 1;
        loop {
            self.rate_limiter.wait().await;

            let failure = match self.try_get_json(url).await {
                Ok(value) => return Ok(value),
                Err(failure) => failure,
            };

            match retry_decision(failure.retryable, attempt, self.max_attempts) {
                RetryDecision::Retry => {
                    warn!(
                        "Attempt {}/{} for {} failed: {:#}",
                        attempt, self.max_attempts, url, failure.error
                    );
                    self.rate_limiter.backoff(attempt).await;
                    attempt += 1;
                }
                RetryDecision::GiveUp => return Err(failure.error.context(fetch_context(url))),
            }
        }
    }

    async fn try_get_json(&self, url: &str) -> Result<Value, RequestFailure> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RequestFailure::retryable(anyhow::Error::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let error = anyhow::anyhow!(describe_status(status));
            return Err(RequestFailure {
                retryable: is_retryable(status),
                error,
            });
        }

        response
            .json::<Value>()
            .await
            .context("Failed to decode JSON response")
            .map_err(RequestFailure::fatal)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}

struct RequestFailure {
    retryable: bool,
    error: anyhow::Error,
}

impl RequestFailure {
    fn retryable(error: anyhow::Error) -> Self {
        Self {
            retryable: true,
            error,
        }
    }

    fn fatal(error: anyhow::Error) -> Self {
        Self {
            retryable: false,
            error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry,
    GiveUp,
}

/// Whether a failed `attempt` (1-based) gets another try
pub fn retry_decision(retryable: bool, attempt: u32, max_attempts: u32) -> RetryDecision {
    if retryable && attempt < max_attempts {
        RetryDecision::Retry
    } else {
        RetryDecision::GiveUp
    }
}

pub fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Human-readable explanation of the status codes chess.com documents
pub fn describe_status(status: StatusCode) -> String {
    match status.as_u16() {
        301 => "301 Moved Permanently: the requested URL has been moved".to_string(),
        304 => "304 Not Modified: the data has not changed since the last request".to_string(),
        404 => "404 Not Found: the player does not exist or the URL is malformed".to_string(),
        410 => "410 Gone: the data is permanently unavailable at this URL".to_string(),
        429 => "429 Too Many Requests: rate limit exceeded".to_string(),
        _ => format!("HTTP error {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_server;
    use std::sync::atomic::Ordering;

    fn settings(base_url: String, max_attempts: u32) -> ApiSettings {
        ApiSettings {
            base_url,
            rate_limit_ms: 0,
            retry_backoff_ms: 0,
            max_attempts,
            ..ApiSettings::default()
        }
    }

    #[test]
    fn test_retry_decision_boundary() {
        assert_eq!(retry_decision(true, 1, 5), RetryDecision::Retry);
        assert_eq!(retry_decision(true, 4, 5), RetryDecision::Retry);
        assert_eq!(retry_decision(true, 5, 5), RetryDecision::GiveUp);
        assert_eq!(retry_decision(false, 1, 5), RetryDecision::GiveUp);
        assert_eq!(retry_decision(true, 1, 1), RetryDecision::GiveUp);
    }

    #[tokio::test]
    async fn test_server_error_uses_every_attempt() {
        let (base_url, hits) = test_server::serve("503 Service Unavailable", "{}").await;
        let mut client = RateLimitedClient::new(&settings(base_url.clone(), 3)).unwrap();

        let err = client.get_json(&format!("{}/pub/player/alice", base_url)).await.unwrap_err();

        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert!(format!("{:#}", err).contains("HTTP error 503"));
    }

    #[tokio::test]
    async fn test_not_found_fails_without_retry() {
        let (base_url, hits) = test_server::serve("404 Not Found", "{}").await;
        let mut client = RateLimitedClient::new(&settings(base_url.clone(), 5)).unwrap();

        let err = client.get_json(&format!("{}/pub/player/nobody", base_url)).await.unwrap_err();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(format!("{:#}", err).contains("404 Not Found"));
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let (base_url, hits) = test_server::serve("200 OK", r#"{"username":"alice"}"#).await;
        let mut client = RateLimitedClient::new(&settings(base_url.clone(), 5)).unwrap();

        let value = client.get_json(&format!("{}/pub/player/alice", base_url)).await.unwrap();

        assert_eq!(value["username"], "alice");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
        assert!(!is_retryable(StatusCode::GONE));
    }

    #[test]
    fn test_describe_status() {
        assert!(describe_status(StatusCode::NOT_FOUND).starts_with("404 Not Found"));
        assert!(describe_status(StatusCode::GONE).starts_with("410 Gone"));
        assert_eq!(describe_status(StatusCode::IM_A_TEAPOT), "HTTP error 418 I'm a teapot");
    }
}
