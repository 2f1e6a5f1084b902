use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::AppError;

/// Connect the pool that backs the running API.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database: {e}")))
}

/// Connect a dedicated single-connection pool for schema migration.
///
/// min=max=1 so the whole upgrade runs on one physical session. The caller
/// closes this connection once the migration finishes; it is never reused
/// for serving.
pub async fn connect_migration(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.min_connections(1)
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database (migration): {e}")))
}
