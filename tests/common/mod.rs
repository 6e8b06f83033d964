//! Shared datastore and server helpers for the end-to-end tests.

#![allow(dead_code)]

use axum::Router;
use sqlx::AnyPool;
use tokio::net::TcpListener;

use greeting_service::store::connect;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Named fixture sets that can be loaded on top of the schema.
#[derive(Debug, Clone, Copy)]
pub enum Fixture {
    /// Customer 42 has email "fake".
    Successful,
    /// No customers at all.
    Unexisting,
}

impl Fixture {
    fn sql(self) -> &'static str {
        match self {
            Fixture::Successful => include_str!("../fixtures/successful.sql"),
            Fixture::Unexisting => include_str!("../fixtures/unexisting.sql"),
        }
    }
}

/// Run each `;`-terminated statement of `script`, skipping comment lines.
async fn run_script(pool: &AnyPool, script: &str) {
    let cleaned: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    for statement in cleaned.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(pool)
            .await
            .unwrap_or_else(|e| panic!("Unable to run {:?}: {}", statement, e));
    }
}

/// Provide a fresh in-memory datastore with the application schema and the
/// given fixtures loaded.
pub async fn database_helper(fixture: Fixture) -> AnyPool {
    let pool = connect("sqlite::memory:")
        .await
        .expect("Unable to open in-memory datastore");

    run_script(&pool, SCHEMA).await;
    run_script(&pool, fixture.sql()).await;

    pool
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
