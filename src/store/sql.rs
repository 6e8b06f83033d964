//! sqlx-backed customer lookup.

use async_trait::async_trait;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};
use tracing::{debug, instrument};

use crate::error::LookupError;

use super::CustomerStore;

/// Query returning the email column for one customer identifier.
pub const CUSTOMER_EMAIL_QUERY: &str = "SELECT email FROM Customers WHERE id = ?";

/// Customer datastore backed by a caller-supplied connection pool.
///
/// The pool handle is borrowed: the store never opens or closes it.
#[derive(Debug, Clone)]
pub struct SqlStore {
    pool: AnyPool,
}

impl SqlStore {
    /// Attach a connection pool to the store.
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Get the attached pool.
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl CustomerStore for SqlStore {
    #[instrument(skip(self))]
    async fn get_customer_email(&self, id: i64) -> Result<String, LookupError> {
        let row: Option<AnyRow> = sqlx::query(CUSTOMER_EMAIL_QUERY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(LookupError::Query)?;

        let email = match row {
            Some(row) => row.try_get::<String, _>("email").map_err(LookupError::Scan)?,
            None => {
                debug!("No customer found");
                String::new()
            }
        };

        Ok(email)
    }
}

/// Open a single-connection pool to the datastore at `url`.
///
/// Accepts any URL scheme supported by the installed sqlx drivers
/// (`mysql://`, `sqlite:`).
pub async fn connect(url: &str) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(url)
        .await
}

/// Open the datastore at `url`, look up one customer's email, and close the
/// pool again.
pub async fn lookup_email(url: &str, id: i64) -> crate::Result<String> {
    let pool = connect(url).await?;
    let result = SqlStore::new(pool.clone()).get_customer_email(id).await;
    pool.close().await;

    Ok(result?)
}
