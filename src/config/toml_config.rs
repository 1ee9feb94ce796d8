use crate::config::{P20Config, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_POLL_INTERVAL_MS};
use crate::utils::error::{P20Error, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration for the standalone runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub module: Option<ModuleSection>,
    pub device: DeviceSection,
    pub polling: Option<PollingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSection {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingSection {
    pub interval_ms: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(P20Error::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| P20Error::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` markers with the environment variable's value.
    /// Unset variables are left as-is so validation reports them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Collapses the file into the module configuration, applying defaults
    /// for anything left out.
    pub fn to_module_config(&self) -> Result<P20Config> {
        let config = P20Config {
            host: self
                .device
                .host
                .clone()
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.device.port.unwrap_or(DEFAULT_PORT),
            poll_interval_ms: self
                .polling
                .as_ref()
                .and_then(|p| p.interval_ms)
                .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[module]
name = "p20-stage-left"

[device]
host = "10.0.20.5"
port = 8088

[polling]
interval_ms = 250
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let module_config = config.to_module_config().unwrap();

        assert_eq!(module_config.host, "10.0.20.5");
        assert_eq!(module_config.port, 8088);
        assert_eq!(module_config.poll_interval_ms, 250);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let toml_content = r#"
[device]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let module_config = config.to_module_config().unwrap();

        assert_eq!(module_config, P20Config::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_P20_HOST", "192.168.1.20");

        let toml_content = r#"
[device]
host = "${TEST_P20_HOST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.device.host.as_deref(), Some("192.168.1.20"));

        std::env::remove_var("TEST_P20_HOST");
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let toml_content = r#"
[device]
host = "127.0.0.1"

[polling]
interval_ms = 10
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.to_module_config().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[device]
host = "p20.stagenet.local"
port = 9000
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let module_config = config.to_module_config().unwrap();
        assert_eq!(module_config.host, "p20.stagenet.local");
        assert_eq!(module_config.port, 9000);
    }
}
