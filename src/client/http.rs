//! reqwest-backed greeting client.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::ClientError;

use super::types::GreetingMessage;
use super::GreetingClient;

/// Path of the hello endpoint on the external API.
pub const HELLO_PATH: &str = "/hello";

/// Client for the external greeting API.
#[derive(Debug, Clone)]
pub struct HttpGreetingClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL of the external API, without a trailing slash.
    base_url: String,
}

impl HttpGreetingClient {
    /// Create a client for the API at `base_url`, using transport defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Create a client from an existing reqwest client.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.external_api_host.clone())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the hello endpoint.
    pub fn hello_url(&self) -> String {
        format!("{}{}", self.base_url, HELLO_PATH)
    }
}

#[async_trait]
impl GreetingClient for HttpGreetingClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_greeting(&self) -> Result<GreetingMessage, ClientError> {
        let response = self
            .http
            .get(self.hello_url())
            .send()
            .await
            .map_err(ClientError::Transport)?;

        debug!(status = %response.status(), "Received hello response");

        let body = response.bytes().await.map_err(ClientError::Read)?;
        let greeting: GreetingMessage = serde_json::from_slice(&body)?;

        Ok(greeting)
    }
}
