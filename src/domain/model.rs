use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A physical or logical display output managed by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub name: String,
}

/// A video source selectable for routing onto a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSource {
    pub id: String,
    pub name: String,
}

/// A layer on the preview (PVW) output of a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvwLayer {
    pub id: String,
    pub name: String,
    pub index: u32,
}

/// Connection status reported to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Ok,
    ConnectionFailure(String),
    Disconnected,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connecting => write!(f, "connecting"),
            ConnectionStatus::Ok => write!(f, "ok"),
            ConnectionStatus::ConnectionFailure(msg) => write!(f, "connection failure: {}", msg),
            ConnectionStatus::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// A value pushed to the host for a live variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Text(s) => write!(f, "{}", s),
            VariableValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::Text(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::Text(value)
    }
}

impl From<usize> for VariableValue {
    fn from(value: usize) -> Self {
        VariableValue::Number(value as i64)
    }
}

/// The module's mirror of the device state.
///
/// `pvw_layers_by_screen` only holds entries for screens whose PVW has been
/// refreshed at least once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceState {
    pub connected: bool,
    pub selected_screen_id: Option<String>,
    pub screens: Vec<Screen>,
    pub inputs: Vec<InputSource>,
    pub pvw_layers_by_screen: HashMap<String, Vec<PvwLayer>>,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl DeviceState {
    pub fn selected_screen(&self) -> Option<&Screen> {
        let id = self.selected_screen_id.as_deref()?;
        self.screens.iter().find(|s| s.id == id)
    }

    /// PVW layers of the selected screen, empty when nothing is selected
    /// or the selection has not been refreshed yet.
    pub fn pvw_layers(&self) -> &[PvwLayer] {
        self.selected_screen_id
            .as_deref()
            .and_then(|id| self.pvw_layers_by_screen.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn screen_exists(&self, screen_id: &str) -> bool {
        self.screens.iter().any(|s| s.id == screen_id)
    }

    pub fn input_exists(&self, input_id: &str) -> bool {
        self.inputs.iter().any(|i| i.id == input_id)
    }
}
