use crate::config::LogConfig;

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine-readable.
pub fn init(cfg: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(cfg.filter.as_str())
        .with_writer(std::io::stderr);

    if cfg.json {
        builder.with_target(false).json().init();
    } else {
        builder.init();
    }
}
