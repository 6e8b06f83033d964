//! Customer greeting service.
//!
//! A small HTTP service that greets customers with a message fetched from an
//! external API, backed by a customer datastore. Each layer is small enough
//! to be tested on its own, and the whole is tested end to end:
//!
//! ```text
//! GET /  ──▶ api::home ──▶ GreetingClient ──▶ GET {EXTERNAL_API_HOST}/hello
//!                 │
//!                 ▼
//!   200 {"message": "Hello, world!"}  |  500 {"error": "unable to get message"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`client`]: External greeting API client
//! - [`store`]: Customer datastore lookup
//! - [`service`]: Customer service over the datastore
//! - [`api`]: HTTP API for the home and health endpoints
//! - [`mockapi`]: Mocked external greeting API
//! - [`metrics`]: Request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod mockapi;
pub mod service;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
