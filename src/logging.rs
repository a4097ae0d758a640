//! # Logging
//!
//! Tracing subscriber initialization from [`LogConfig`].

use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured level. Calling this more than once is a no-op.
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let initialized = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    if initialized.is_err() {
        tracing::debug!("global tracing subscriber was already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = LogConfig::default();
        init(&config);
        init(&config);
    }
}
