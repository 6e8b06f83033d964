//! Greeting payload types.

use serde::{Deserialize, Serialize};

/// Greeting returned by the external API's hello endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingMessage {
    /// Greeting text.
    pub message: String,
}

impl GreetingMessage {
    /// Create a greeting with the given text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
