#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod infra;
pub mod routes;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use app::Application;
pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use error::AppError;
pub use infra::db::{connect_db, connect_migration};
pub use state::AppState;
