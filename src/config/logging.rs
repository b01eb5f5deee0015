//! Logging configuration and subscriber setup

use serde::Deserialize;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info,shopping_list=debug".to_string()
}

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global `tracing` subscriber.
///
/// Only the first call has an effect. A subscriber installed elsewhere
/// (a test harness, the host application) is left in place.
pub fn init_tracing(config: &LoggingConfig) {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.filter))
            .unwrap_or_else(|_| EnvFilter::new(default_filter()));

        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let result = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
        }
    });
}
