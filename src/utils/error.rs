use thiserror::Error;

#[derive(Error, Debug)]
pub enum P20Error {
    #[error("Device connection failed: {message}")]
    ConnectionError { message: String },

    #[error("Device command failed: {message}")]
    DeviceError { message: String },

    #[error("Not connected to device")]
    NotConnected,

    #[error("No screen selected")]
    NoScreenSelected,

    #[error("Unknown screen id: {id}")]
    UnknownScreen { id: String },

    #[error("Unknown input id: {id}")]
    UnknownInput { id: String },

    #[error("Unknown PVW layer id: {id}")]
    UnknownLayer { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Connection,
    Device,
    Operator,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl P20Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            P20Error::ConnectionError { .. } | P20Error::NotConnected => ErrorCategory::Connection,
            P20Error::DeviceError { .. } => ErrorCategory::Device,
            P20Error::NoScreenSelected
            | P20Error::UnknownScreen { .. }
            | P20Error::UnknownInput { .. }
            | P20Error::UnknownLayer { .. } => ErrorCategory::Operator,
            P20Error::ConfigValidationError { .. }
            | P20Error::InvalidConfigValueError { .. }
            | P20Error::MissingConfigError { .. } => ErrorCategory::Configuration,
            P20Error::IoError(_) | P20Error::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Connection => ErrorSeverity::Medium,
            ErrorCategory::Device => ErrorSeverity::Medium,
            ErrorCategory::Operator => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            P20Error::ConnectionError { .. } | P20Error::NotConnected => {
                "Check the device host/port settings and that the P20 is reachable".to_string()
            }
            P20Error::DeviceError { .. } => {
                "Retry the command; if it keeps failing, power-cycle the device".to_string()
            }
            P20Error::NoScreenSelected => {
                "Run the 'Select screen' action before routing inputs".to_string()
            }
            P20Error::UnknownScreen { .. }
            | P20Error::UnknownInput { .. }
            | P20Error::UnknownLayer { .. } => {
                "Force a refresh so dropdown choices match the live device state".to_string()
            }
            P20Error::ConfigValidationError { field, .. }
            | P20Error::InvalidConfigValueError { field, .. }
            | P20Error::MissingConfigError { field } => {
                format!("Fix the '{}' field in the module configuration", field)
            }
            P20Error::IoError(_) => "Check file permissions and paths".to_string(),
            P20Error::SerializationError(_) => {
                "Check that the configuration file is well-formed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Connection => format!("Cannot reach the P20: {}", self),
            ErrorCategory::Device => format!("The P20 rejected a command: {}", self),
            ErrorCategory::Operator => format!("Action not applicable: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, P20Error>;
