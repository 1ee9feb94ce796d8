pub mod actions;
pub mod feedbacks;
pub mod instance;
pub mod variables;

pub use crate::domain::model::{
    ConnectionStatus, DeviceState, InputSource, PvwLayer, Screen, VariableValue,
};
pub use crate::domain::ports::{ControlHost, DeviceClient};
pub use crate::utils::error::Result;
