//! Shared helpers for DB-backed integration tests.
//!
//! These tests require a running PostgreSQL reachable via the `GRAFT_DB_*`
//! environment variables and are gated behind the `db-tests` feature.

#![allow(dead_code)]

use graft_api::{DbConfig, EdgeExecutor};
use tokio_postgres::{Client, NoTls};

/// Open a raw connection for direct table inspection.
pub async fn test_client() -> Client {
    DbConfig::from_env()
        .connect()
        .await
        .expect("Failed to connect to test database")
}

/// Open a raw connection whose driver task handle is kept, so tests can
/// kill the connection out from under a client.
pub async fn test_client_with_driver() -> (Client, tokio::task::JoinHandle<()>) {
    let config = DbConfig::from_env();

    let mut pg_config = tokio_postgres::Config::new();
    pg_config
        .host(&config.host)
        .port(config.port)
        .dbname(&config.dbname)
        .user(&config.user)
        .password(&config.password)
        .connect_timeout(config.connect_timeout);

    let (client, connection) = pg_config
        .connect(NoTls)
        .await
        .expect("Failed to connect to test database");

    let driver = tokio::spawn(async move {
        let _ = connection.await;
    });

    (client, driver)
}

/// Create the edge table if this database has not seen it yet.
pub async fn ensure_schema(client: &Client) {
    client
        .batch_execute(
            "CREATE TABLE IF NOT EXISTS edge_t (
                id TEXT PRIMARY KEY,
                context TEXT,
                source TEXT,
                code TEXT,
                target TEXT
            )",
        )
        .await
        .expect("Failed to create edge_t");
}

/// Build an executor on a fresh connection, with the schema in place.
pub async fn test_executor() -> EdgeExecutor {
    let client = test_client().await;
    ensure_schema(&client).await;
    EdgeExecutor::new(client)
}

pub async fn edge_count(client: &Client) -> i64 {
    let row = client
        .query_one("SELECT COUNT(*) FROM edge_t", &[])
        .await
        .expect("Failed to count edges");
    row.get(0)
}

pub async fn edge_exists(client: &Client, id: &str) -> bool {
    let row = client
        .query_opt("SELECT 1 FROM edge_t WHERE id = $1", &[&id])
        .await
        .expect("Failed to query edge");
    row.is_some()
}
