const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Installs the global subscriber. `--verbose` wins over `LOG_LEVEL`, which
/// wins over [`DEFAULT_LOG_LEVEL`].
pub(crate) fn init(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL");
    let mut invalid_env_val = None;
    let log_level =
        if verbose {
            tracing::Level::DEBUG
        } else if let Ok(raw) = env_val.as_deref() {
            parse_log_level(raw).unwrap_or_else(|| {
                invalid_env_val = Some(raw.trim());
                DEFAULT_LOG_LEVEL
            })
        } else {
            DEFAULT_LOG_LEVEL
        };

    // stderr keeps `gqlkit print` output pipeable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(raw) = invalid_env_val {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{raw}`");
    }
}

pub(crate) fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "trace" => Some(tracing::Level::TRACE),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
