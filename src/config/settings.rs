use serde::{Deserialize, Serialize};
use std::env;

use crate::models::VarParameters;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub var: VarSettings,
    pub logging: LoggingSettings,
}

/// Defaults for historical VaR runs when the caller supplies none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarSettings {
    pub window_days: u32,
    pub confidence: f64,
    pub interval_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            var: VarSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for VarSettings {
    fn default() -> Self {
        VarSettings {
            window_days: 280,
            confidence: 0.01,
            interval_days: 10,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

impl From<VarSettings> for VarParameters {
    fn from(settings: VarSettings) -> Self {
        VarParameters {
            window_days: settings.window_days,
            confidence: settings.confidence,
            interval_days: settings.interval_days,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let _settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let defaults = VarSettings::default();
        Ok(Settings {
            var: VarSettings {
                window_days: env_or("VAR_WINDOW_DAYS", defaults.window_days),
                confidence: env_or("VAR_CONFIDENCE", defaults.confidence),
                interval_days: env_or("VAR_INTERVAL_DAYS", defaults.interval_days),
            },
            logging: LoggingSettings {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
