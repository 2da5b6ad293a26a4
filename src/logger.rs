//! Diagnostic output for the command line binary.

use tracing_subscriber::EnvFilter;

/// Default filter when neither a level nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Install a stderr subscriber.
///
/// `level` takes precedence over `RUST_LOG`. An unparsable level falls back
/// to [`DEFAULT_LOG_LEVEL`]. Calling this more than once keeps the first
/// subscriber.
pub fn init_logger(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info;

    #[test]
    fn test_logger_init_twice() {
        init_logger(Some("debug"));
        init_logger(Some("off"));
        info!("still logging to the first subscriber");
    }

    #[test]
    fn test_logger_init_from_env() {
        init_logger(None);
    }

    #[test]
    fn test_logger_init_invalid_level() {
        init_logger(Some("not a [level"));
    }
}
