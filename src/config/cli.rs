use crate::config::toml_config::TomlConfig;
use crate::config::P20Config;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

/// Standalone runner arguments. A config file provides the base values and
/// explicit flags override it field by field.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "p20-pvw",
    about = "Pixelhue P20 – PVW aware control (standalone runner)"
)]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Device host or IP
    #[arg(long)]
    pub host: Option<String>,

    /// Device port
    #[arg(long)]
    pub port: Option<u16>,

    /// Poll interval in milliseconds (0 disables polling)
    #[arg(long = "poll-interval")]
    pub poll_interval_ms: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON log lines instead of the compact format
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<P20Config> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.to_module_config()?,
            None => P20Config::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(interval) = self.poll_interval_ms {
            config.poll_interval_ms = interval;
        }

        config.validate()?;
        Ok(config)
    }
}
