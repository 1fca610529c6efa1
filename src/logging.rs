//! Logging Setup
//!
//! Installs the global tracing subscriber from [`LoggingConfig`]. `RUST_LOG`
//! takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive for a configured level
pub fn filter_directive(level: &str) -> String {
    format!("file_overview={},overview={}", level, level)
}

/// Initialize logging. Logs go to stderr unless a file is configured, so
/// command output on stdout stays clean.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));
    let json = config.format.eq_ignore_ascii_case("json");

    let registry = tracing_subscriber::registry().with(filter);

    let result = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let writer = Mutex::new(file);
            if json {
                registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
                    .try_init()
            } else {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_ansi(false)
                            .with_writer(writer),
                    )
                    .try_init()
            }
        }
        None => {
            if json {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr),
                    )
                    .try_init()
            } else {
                registry
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                    .try_init()
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug"), "file_overview=debug,overview=debug");
    }
}
