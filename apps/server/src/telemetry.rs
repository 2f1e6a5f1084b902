use tracing_subscriber::EnvFilter;

/// Initialize tracing once, before any action is dispatched.
///
/// `RUST_LOG` wins when set; otherwise `debug` raises the default level.
/// Debug mode is insecure for externally reachable deployments, which is why
/// it is opt-in per invocation and never a default.
pub fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "debug,sqlx=info,sea_orm=info"
    } else {
        "info,sqlx=warn,sea_orm=warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}
