pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{FixtureClient, LoggingHost, RecordingHost};
pub use crate::config::{config_fields, ConfigField, P20Config, TomlConfig};
pub use crate::core::actions::Action;
pub use crate::core::feedbacks::Feedback;
pub use crate::core::instance::P20Instance;
pub use crate::domain::model::{ConnectionStatus, DeviceState, InputSource, PvwLayer, Screen};
pub use crate::domain::ports::{ControlHost, DeviceClient};
pub use crate::utils::error::{P20Error, Result};
