//! Application configuration management.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::types::Currency;

/// Default tolerance for settlement cursor termination, in major currency units.
pub const DEFAULT_EPSILON: Decimal = dec!(0.01);

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Settlement engine configuration.
    #[serde(default)]
    pub settlement: SettlementConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settlement engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementConfig {
    /// Settlement currency of the list; fixes allocation precision.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Remaining balance below which a settlement cursor advances.
    #[serde(default = "default_epsilon")]
    pub epsilon: Decimal,
}

fn default_currency() -> Currency {
    Currency::Usd
}

fn default_epsilon() -> Decimal {
    DEFAULT_EPSILON
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            epsilon: default_epsilon(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "kitty=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KITTY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
