//! Mock greeting client for unit testing.
//!
//! This module provides a mock client that can be used in tests
//! without making real network requests. Failures surface as a decode
//! error, as a malformed upstream body would.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;

use super::types::GreetingMessage;
use super::GreetingClient;

/// Configuration for mock client behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Message to return on success.
    pub message: String,
    /// Whether to fail greeting requests.
    pub fail: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock greeting client for testing.
#[derive(Debug, Clone, Default)]
pub struct MockGreetingClient {
    /// Mock configuration.
    config: MockConfig,
    /// Number of greetings requested so far.
    calls: Arc<AtomicU64>,
}

impl MockGreetingClient {
    /// Create a mock client with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a mock client that always answers with `message`.
    pub fn succeeding(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig {
            message: message.into(),
            ..Default::default()
        })
    }

    /// Create a mock client that always fails.
    pub fn failing() -> Self {
        Self::with_config(MockConfig {
            fail: true,
            ..Default::default()
        })
    }

    /// Number of greetings requested so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GreetingClient for MockGreetingClient {
    async fn fetch_greeting(&self) -> Result<GreetingMessage, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.fail {
            let err = serde_json::from_str::<GreetingMessage>("some error").unwrap_err();
            return Err(ClientError::Decode(err));
        }

        Ok(GreetingMessage::new(self.config.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_client_success() {
        let client = MockGreetingClient::succeeding("foo");

        let greeting = client.fetch_greeting().await.unwrap();
        assert_eq!(greeting.message, "foo");
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn mock_client_failure_modes() {
        let client = MockGreetingClient::failing();

        let result = client.fetch_greeting().await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn clones_share_call_count() {
        let client = MockGreetingClient::succeeding("foo");
        let clone = client.clone();

        clone.fetch_greeting().await.unwrap();
        clone.fetch_greeting().await.unwrap();
        assert_eq!(client.calls(), 2);
    }
}
