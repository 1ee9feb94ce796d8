use crate::domain::model::{ConnectionStatus, VariableValue};
use crate::domain::ports::ControlHost;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Host adapter for the standalone runner: every host call becomes a log
/// line instead of a control-surface update.
#[derive(Debug, Default)]
pub struct LoggingHost;

impl LoggingHost {
    pub fn new() -> Self {
        Self
    }
}

impl ControlHost for LoggingHost {
    fn set_status(&self, status: ConnectionStatus) {
        match &status {
            ConnectionStatus::ConnectionFailure(msg) => {
                tracing::warn!("Status: connection failure ({})", msg)
            }
            other => tracing::info!("Status: {}", other),
        }
    }

    fn set_variable_values(&self, values: HashMap<String, VariableValue>) {
        let mut pairs: Vec<_> = values.iter().collect();
        pairs.sort_by_key(|(name, _)| name.as_str());
        for (name, value) in pairs {
            tracing::debug!("Variable {} = {}", name, value);
        }
    }

    fn check_feedbacks(&self) {
        tracing::trace!("Feedback re-evaluation requested");
    }
}

/// Host adapter that records everything it is handed. Used by the
/// integration tests to observe the module from the host's side.
#[derive(Debug, Default)]
pub struct RecordingHost {
    statuses: Mutex<Vec<ConnectionStatus>>,
    variable_updates: Mutex<Vec<HashMap<String, VariableValue>>>,
    feedback_checks: AtomicUsize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses(&self) -> Vec<ConnectionStatus> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn last_status(&self) -> Option<ConnectionStatus> {
        self.statuses.lock().unwrap().last().cloned()
    }

    pub fn last_variable_values(&self) -> Option<HashMap<String, VariableValue>> {
        self.variable_updates.lock().unwrap().last().cloned()
    }

    pub fn variable_update_count(&self) -> usize {
        self.variable_updates.lock().unwrap().len()
    }

    pub fn feedback_check_count(&self) -> usize {
        self.feedback_checks.load(Ordering::SeqCst)
    }
}

impl ControlHost for RecordingHost {
    fn set_status(&self, status: ConnectionStatus) {
        self.statuses.lock().unwrap().push(status);
    }

    fn set_variable_values(&self, values: HashMap<String, VariableValue>) {
        self.variable_updates.lock().unwrap().push(values);
    }

    fn check_feedbacks(&self) {
        self.feedback_checks.fetch_add(1, Ordering::SeqCst);
    }
}
