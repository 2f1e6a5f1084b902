use clap::Parser;
use egon_server::app::Application;
use egon_server::cli::{Cli, Command};
use egon_server::config::AppConfig;
use egon_server::telemetry;

#[actix_web::main]
async fn main() {
    // clap handles --version and usage errors before anything else runs.
    let cli = Cli::parse();

    let debug = matches!(cli.command, Command::Run { debug: true, .. });
    telemetry::init_tracing(debug);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app = Application::new(config);
    if let Err(e) = app.execute(cli).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
