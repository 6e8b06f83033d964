//! Customer datastore access.
//!
//! This module handles:
//! - The datastore contract consumed by the service
//! - The sqlx-backed customer lookup

pub mod sql;

use async_trait::async_trait;

use crate::error::LookupError;

pub use sql::{connect, lookup_email, SqlStore, CUSTOMER_EMAIL_QUERY};

/// Contract for a customer datastore.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Return the email of customer `id`, or an empty string when no such
    /// customer exists.
    async fn get_customer_email(&self, id: i64) -> Result<String, LookupError>;
}
