use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG`, `info` when unset
/// - **Compact lines**: Module targets are hidden; the `operation` span carries context
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - One line per hop plus the per-operation summary
/// - `RUST_LOG=debug` - Adds request URLs and full decoded records
/// - `RUST_LOG=prod_order_conf::framework=debug` - Debug only for the fetch layer
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
