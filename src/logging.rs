use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SVN_COLOR_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Diagnostics go to standard error so they never mix with svn output.
pub fn init_tracing() {
    // SVN_COLOR_LOG=svn_color=debug
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();
}
