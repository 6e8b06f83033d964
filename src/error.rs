//! Unified error types for the greeting service.

use thiserror::Error;

/// Unified error type for the greeting service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration was loaded but is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Customer lookup error.
    #[error("customer lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Datastore connection error.
    #[error("datastore error: {0}")]
    Datastore(#[from] sqlx::Error),
}

/// Errors raised while fetching a greeting from the external API.
///
/// The request handler treats every variant the same way: the greeting is
/// unavailable.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The outbound request could not be made or completed.
    #[error("unable to get external API hello response: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("unable to read hello response: {0}")]
    Read(#[source] reqwest::Error),

    /// The response body is not the expected JSON object.
    #[error("unable to decode hello response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised by the customer datastore.
///
/// A missing customer is not an error: lookups return an empty email.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The query failed to execute.
    #[error("unable to query database: {0}")]
    Query(#[source] sqlx::Error),

    /// A result row could not be read.
    #[error("unable to parse customer email: {0}")]
    Scan(#[source] sqlx::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
