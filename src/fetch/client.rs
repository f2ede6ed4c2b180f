//! HTTP fetching using wreq for TLS fingerprint emulation.

use super::error::FetchError;
use super::retry::{is_retryable_status, RetryPolicy};
use crate::config::Config;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching page bodies - enables mocking for tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the full response body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Redirect hops followed before a response is treated as final.
const MAX_REDIRECTS: usize = 10;

/// Request headers sent with every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestProfile {
    pub user_agent: String,
    pub accept_language: String,
}

impl From<&Config> for RequestProfile {
    fn from(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            accept_language: config.accept_language.clone(),
        }
    }
}

/// Outcome of a single failed attempt.
enum AttemptError {
    Retry(String),
    Fatal(FetchError),
}

/// HTTP fetcher with browser impersonation and bounded retries.
pub struct HttpFetcher {
    client: Client,
    profile: RequestProfile,
    retry: RetryPolicy,
}

impl HttpFetcher {
    /// Creates a fetcher from the configured headers, proxy and retry policy.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .redirect(wreq::redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).map_err(FetchError::Client)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self { client, profile: RequestProfile::from(config), retry: config.retry })
    }

    /// Performs one GET request.
    async fn attempt(&self, url: &str) -> Result<String, AttemptError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("User-Agent", self.profile.user_agent.as_str())
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", self.profile.accept_language.as_str())
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Cache-Control", "no-cache")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .map_err(|e| AttemptError::Retry(format!("request failed: {}", e)))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let final_url = response.uri().to_string();
        if final_url != url {
            debug!("Redirected to {}", final_url);
        }

        if !status.is_success() {
            let code = status.as_u16();
            if is_retryable_status(code) {
                return Err(AttemptError::Retry(format!("status {}", code)));
            }
            return Err(AttemptError::Fatal(FetchError::Status {
                url: url.to_string(),
                status: code,
            }));
        }

        response
            .text()
            .await
            .map_err(|e| AttemptError::Retry(format!("failed to read response body: {}", e)))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let attempts = self.retry.attempts();
        let mut reason = String::new();

        for attempt in 1..=attempts {
            if attempt > 1 {
                let delay = self.retry.delay(attempt - 2);
                debug!("Retrying {} in {}ms", url, delay.as_millis());
                tokio::time::sleep(delay).await;
            }

            match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(AttemptError::Fatal(err)) => return Err(err),
                Err(AttemptError::Retry(why)) => {
                    warn!("Attempt {}/{} for {} failed: {}", attempt, attempts, url, why);
                    reason = why;
                }
            }
        }

        Err(FetchError::Exhausted { url: url.to_string(), attempts, reason })
    }
}
