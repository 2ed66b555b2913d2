//! HTTP Transport
//!
//! Implementation of `Transport` over reqwest. The same code runs natively
//! and in the browser, where reqwest delegates to `fetch`.

use async_trait::async_trait;
use barn_core::{
    config::ConsoleConfig,
    error::{ConsoleError, Result},
    transport::Transport,
};
use serde_json::Value;

/// JSON-over-HTTP transport to the analysis service
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ConsoleConfig,
}

impl HttpTransport {
    /// Create a transport for `base_url` with default client settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: ConsoleConfig::with_base_url(base_url),
        }
    }

    /// Create from configuration
    ///
    /// `timeout_secs` is applied on native targets only; browser requests
    /// have no client-side timeout.
    pub fn from_config(config: &ConsoleConfig) -> Result<Self> {
        config.validate()?;

        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ConsoleError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        let url = self.config.url_for(path);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "request failed");
                ConsoleError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "service returned error status");
            return Err(ConsoleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ConsoleError::Decode(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
