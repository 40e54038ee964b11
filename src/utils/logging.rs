use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Verbosity comes from `RUST_LOG`, default `info`.
/// Logs go to stderr so they never mix with fixture output.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
