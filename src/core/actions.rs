use crate::domain::model::DeviceState;

pub const ACTION_SELECT_SCREEN: &str = "select_screen";
pub const ACTION_ROUTE_INPUT_TO_PVW_LAYER: &str = "route_input_to_pvw_layer";
pub const ACTION_REFRESH_STATE: &str = "refresh_state";

/// A discrete operation a control-surface button can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectScreen { screen_id: String },
    RouteInputToPvwLayer { layer_id: String, input_id: String },
    RefreshState,
}

/// One entry in an option dropdown, derived from live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownChoice {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub options: Vec<DropdownOption>,
}

pub fn action_definitions() -> Vec<ActionDefinition> {
    vec![
        ActionDefinition {
            id: ACTION_SELECT_SCREEN,
            name: "Select screen (context)",
            options: vec![DropdownOption {
                id: "screen_id",
                label: "Screen",
            }],
        },
        ActionDefinition {
            id: ACTION_ROUTE_INPUT_TO_PVW_LAYER,
            name: "Route INPUT → PVW Layer (selected screen)",
            options: vec![
                DropdownOption {
                    id: "layer_id",
                    label: "PVW Layer",
                },
                DropdownOption {
                    id: "input_id",
                    label: "Input",
                },
            ],
        },
        ActionDefinition {
            id: ACTION_REFRESH_STATE,
            name: "Force refresh state",
            options: vec![],
        },
    ]
}

pub fn screen_choices(state: &DeviceState) -> Vec<DropdownChoice> {
    state
        .screens
        .iter()
        .map(|s| DropdownChoice {
            id: s.id.clone(),
            label: s.name.clone(),
        })
        .collect()
}

pub fn input_choices(state: &DeviceState) -> Vec<DropdownChoice> {
    state
        .inputs
        .iter()
        .map(|i| DropdownChoice {
            id: i.id.clone(),
            label: i.name.clone(),
        })
        .collect()
}

/// Layer choices of the selected screen; empty when nothing is selected.
pub fn layer_choices(state: &DeviceState) -> Vec<DropdownChoice> {
    state
        .pvw_layers()
        .iter()
        .map(|l| DropdownChoice {
            id: l.id.clone(),
            label: l.name.clone(),
        })
        .collect()
}
