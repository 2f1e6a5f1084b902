use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::infra::db::{connect_db, connect_migration};
use crate::infra::lock::{lock_timeout, SchemaLock};
use crate::routes;
use crate::state::AppState;

/// Entry point for instantiating and executing the application.
///
/// Owns the process-wide configuration and sequences the two operations the
/// CLI exposes: migrate the database, and run the API (which always migrates
/// first).
pub struct Application {
    config: AppConfig,
}

impl Application {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Migrate the application database to the current schema.
    ///
    /// If the database does not exist, it is created. The upgrade runs under
    /// a scoped schema lock and on a dedicated connection that is closed
    /// whether the migration succeeds or fails.
    pub async fn migrate_db(&self) -> Result<(), AppError> {
        let _guard = SchemaLock::acquire(&self.config.database_url, lock_timeout()).await?;

        let conn = connect_migration(&self.config.database_url).await?;
        let result = migration::migrate(&conn).await;

        if let Err(e) = conn.close().await {
            warn!(error = %e, "failed to close migration connection");
        }

        result.map_err(|e| AppError::db(format!("schema migration failed: {e}")))
    }

    /// Migrate, then bind the API listener.
    ///
    /// The returned server has a fully migrated schema behind it before it
    /// accepts a single request; callers await it to serve until externally
    /// terminated.
    pub async fn start_api(&self, host: &str, port: u16) -> Result<Server, AppError> {
        self.migrate_db().await?;

        let db = connect_db(&self.config.database_url).await?;
        let data = web::Data::new(AppState::new(db));

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .configure(routes::configure)
        })
        .bind((host, port))
        .map_err(|e| AppError::internal(format!("failed to bind {host}:{port}: {e}")))?
        .run();

        Ok(server)
    }

    /// Run the application: migrate the database, then serve the API.
    pub async fn run_api(&self, host: &str, port: u16, debug: bool) -> Result<(), AppError> {
        if debug {
            warn!("debug mode enabled (insecure); never expose this server to external traffic");
        }

        let server = self.start_api(host, port).await?;
        info!("serving status API on http://{host}:{port}");

        server
            .await
            .map_err(|e| AppError::internal(format!("server terminated abnormally: {e}")))
    }

    /// Dispatch the parsed command to its action.
    pub async fn execute(&self, cli: Cli) -> Result<(), AppError> {
        match cli.command {
            Command::Migrate => self.migrate_db().await,
            Command::Run { host, port, debug } => self.run_api(&host, port, debug).await,
        }
    }
}
