//! Greeting client for the external greeting API.
//!
//! This module handles:
//! - The greeting message type
//! - The client contract consumed by the request handler
//! - The reqwest-backed client
//! - Mock client for testing

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod types;

use async_trait::async_trait;

use crate::error::ClientError;

pub use http::HttpGreetingClient;
#[cfg(test)]
pub use mock::MockGreetingClient;
pub use types::GreetingMessage;

/// Source of greeting messages.
#[async_trait]
pub trait GreetingClient: Send + Sync {
    /// Fetch one greeting message.
    async fn fetch_greeting(&self) -> Result<GreetingMessage, ClientError>;
}
