use crate::domain::model::{ConnectionStatus, InputSource, PvwLayer, Screen, VariableValue};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Device access seam. The real transport (once the P20 wire protocol is
/// settled) plugs in here; the shipped implementation serves fixtures.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    async fn connect(&self, host: &str, port: u16) -> Result<()>;
    async fn disconnect(&self) -> Result<()>;
    async fn fetch_screens(&self) -> Result<Vec<Screen>>;
    async fn fetch_inputs(&self) -> Result<Vec<InputSource>>;
    async fn fetch_pvw_layers(&self, screen_id: &str) -> Result<Vec<PvwLayer>>;
    async fn route_input(&self, screen_id: &str, layer_id: &str, input_id: &str) -> Result<()>;
}

/// The host control application. The module pushes status transitions and
/// variable values through this, and asks it to re-evaluate feedbacks after
/// every state change.
pub trait ControlHost: Send + Sync {
    fn set_status(&self, status: ConnectionStatus);
    fn set_variable_values(&self, values: HashMap<String, VariableValue>);
    fn check_feedbacks(&self);
}
