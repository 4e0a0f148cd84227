mod reply;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tokio::time::timeout;
use tracing::debug;

use crate::{error::EnhanceError, prompt::ComposedPayload, AppConfig};

pub use reply::UpstreamReply;

/// Client for the hosted chat-completion endpoint. Cheap to clone; clones
/// share one connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    host: String,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>, host: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            host: host.into(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.upstream_url.clone(),
            config.upstream_host.clone(),
            config.timeout(),
        )
    }

    /// Sends one request and decodes the reply. Non-2xx statuses fail
    /// without reading the body; nothing is retried.
    pub async fn enhance(
        &self,
        api_key: &str,
        payload: &ComposedPayload,
    ) -> Result<UpstreamReply, EnhanceError> {
        let headers = self.headers(api_key)?;

        let exchange = async {
            let response = self
                .http
                .post(&self.url)
                .headers(headers)
                .json(payload)
                .send()
                .await
                .map_err(EnhanceError::Transport)?;

            let status = response.status();
            if !status.is_success() {
                return Err(EnhanceError::Upstream { status });
            }
            debug!(%status, "upstream responded");

            response
                .json::<UpstreamReply>()
                .await
                .map_err(EnhanceError::Decode)
        };

        timeout(self.timeout, exchange)
            .await
            .map_err(|_| EnhanceError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            })?
    }

    fn headers(&self, api_key: &str) -> Result<HeaderMap, EnhanceError> {
        // A key that cannot be a header value is as good as no key.
        let key = HeaderValue::from_str(api_key).map_err(|_| EnhanceError::ConfigurationMissing)?;
        let host = HeaderValue::from_str(&self.host).map_err(|_| EnhanceError::ConfigurationMissing)?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-rapidapi-key"), key);
        headers.insert(HeaderName::from_static("x-rapidapi-host"), host);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}
