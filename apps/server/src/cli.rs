use clap::{Parser, Subcommand};

/// Application command line interface.
///
/// Defines the CLI grammar and hands back a tagged [`Command`] for the
/// lifecycle component to match on. Exactly one subcommand is required;
/// `--version` short-circuits before any action is selected.
#[derive(Debug, Parser)]
#[command(name = "egon-server")]
#[command(version)]
#[command(about = "Administrative utility for the Egon backend server")]
#[command(arg_required_else_help = false)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Migrate the application database to the current schema
    Migrate,

    /// Migrate the database, then run the API webserver
    Run {
        /// The hostname to listen on
        #[arg(long, default_value = "localhost")]
        host: String,

        /// The port of the webserver
        #[arg(long, default_value_t = 5000)]
        port: u16,

        /// Enable debug mode (insecure)
        #[arg(long)]
        debug: bool,
    },
}
