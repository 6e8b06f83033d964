//! Customer service on top of the datastore.

use tracing::warn;

use crate::store::CustomerStore;

/// Identifier of the customer greeted by [`Service::get`].
pub const GREETED_CUSTOMER_ID: i64 = 42;

/// Service resolving the greeted customer's email.
#[derive(Debug, Clone)]
pub struct Service<S> {
    store: S,
}

impl<S: CustomerStore> Service<S> {
    /// Create a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return the greeted customer's email.
    ///
    /// Lookup failures are logged and reported as an empty email.
    pub async fn get(&self) -> String {
        match self.store.get_customer_email(GREETED_CUSTOMER_ID).await {
            Ok(email) => email,
            Err(e) => {
                warn!(error = %e, "Unable to get customer email");
                String::new()
            }
        }
    }
}
