//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;
use crate::error::{AppError, AppResult};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Fails instead of panicking when
/// a subscriber is already installed.
pub fn init_tracing(config: &TelemetryConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| AppError::config(format!("Invalid log level: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| AppError::internal(format!("Tracing already initialised: {}", e)))?;

    tracing::debug!(service = %config.service_name, "Tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_without_panicking() {
        let config = TelemetryConfig::default();

        // Another test in this binary may have installed a subscriber first.
        let _ = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(matches!(second, Err(AppError::Internal(_))));
    }
}
