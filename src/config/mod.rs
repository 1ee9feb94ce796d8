#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use self::toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 0;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

pub const MIN_POLL_INTERVAL_MS: u64 = 100;
pub const MAX_POLL_INTERVAL_MS: u64 = 5000;

/// Module configuration as entered by the operator in the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P20Config {
    pub host: String,
    pub port: u16,
    pub poll_interval_ms: u64,
}

impl Default for P20Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl P20Config {
    /// Polling is disabled entirely at interval 0.
    pub fn polling_enabled(&self) -> bool {
        self.poll_interval_ms > 0
    }
}

impl Validate for P20Config {
    fn validate(&self) -> Result<()> {
        validation::validate_host("host", &self.host)?;
        if self.poll_interval_ms > 0 {
            validation::validate_range(
                "poll_interval_ms",
                self.poll_interval_ms,
                MIN_POLL_INTERVAL_MS,
                MAX_POLL_INTERVAL_MS,
            )?;
        }
        Ok(())
    }
}

/// A field descriptor in the configuration form the host renders.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ConfigField {
    StaticText {
        id: &'static str,
        label: &'static str,
        value: &'static str,
    },
    TextInput {
        id: &'static str,
        label: &'static str,
        width: u8,
        default: &'static str,
        regex: &'static str,
    },
    Number {
        id: &'static str,
        label: &'static str,
        width: u8,
        default: i64,
        min: i64,
        max: i64,
    },
}

impl ConfigField {
    pub fn id(&self) -> &'static str {
        match self {
            ConfigField::StaticText { id, .. }
            | ConfigField::TextInput { id, .. }
            | ConfigField::Number { id, .. } => id,
        }
    }
}

/// The configuration surface the module exposes to the host.
pub fn config_fields() -> Vec<ConfigField> {
    vec![
        ConfigField::StaticText {
            id: "info",
            label: "Info",
            value: "Pixelhue P20 – PVW aware control",
        },
        ConfigField::TextInput {
            id: "host",
            label: "Host / IP",
            width: 6,
            default: DEFAULT_HOST,
            regex: validation::IP_PATTERN,
        },
        ConfigField::Number {
            id: "port",
            label: "Port",
            width: 3,
            default: DEFAULT_PORT as i64,
            min: 0,
            max: 65535,
        },
        ConfigField::Number {
            id: "poll_interval_ms",
            label: "Poll interval (ms)",
            width: 3,
            default: DEFAULT_POLL_INTERVAL_MS as i64,
            min: MIN_POLL_INTERVAL_MS as i64,
            max: MAX_POLL_INTERVAL_MS as i64,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = P20Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 0);
        assert_eq!(config.poll_interval_ms, 500);
        assert!(config.polling_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_disables_polling_but_validates() {
        let config = P20Config {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert!(!config.polling_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_interval_rejected() {
        let config = P20Config {
            poll_interval_ms: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = P20Config {
            poll_interval_ms: 10_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_host_rejected() {
        let config = P20Config {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_fields_cover_surface() {
        let fields = config_fields();
        let ids: Vec<_> = fields.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["info", "host", "port", "poll_interval_ms"]);
    }
}
