use crate::domain::model::DeviceState;

pub const FEEDBACK_PVW_LAYER_COUNT_EQUALS: &str = "pvw_layer_count_equals";

/// A boolean condition the host evaluates against module state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    PvwLayerCountEquals { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberOption {
    pub id: &'static str,
    pub label: &'static str,
    pub default: i64,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<NumberOption>,
}

pub fn feedback_definitions() -> Vec<FeedbackDefinition> {
    vec![FeedbackDefinition {
        id: FEEDBACK_PVW_LAYER_COUNT_EQUALS,
        name: "PVW layer count equals",
        description: "True when PVW layer count == value",
        options: vec![NumberOption {
            id: "count",
            label: "Count",
            default: 1,
            min: 0,
            max: 20,
        }],
    }]
}

pub fn check_feedback(state: &DeviceState, feedback: &Feedback) -> bool {
    match feedback {
        Feedback::PvwLayerCountEquals { count } => state.pvw_layers().len() == *count,
    }
}
