use crate::domain::model::{DeviceState, VariableValue};
use std::collections::HashMap;

pub const VAR_SELECTED_SCREEN: &str = "selected_screen";
pub const VAR_PVW_LAYERS_COUNT: &str = "pvw_layers_count";

/// Placeholder shown while no screen is selected.
pub const NO_SCREEN_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    pub id: &'static str,
    pub name: &'static str,
}

pub fn variable_definitions() -> Vec<VariableDefinition> {
    vec![
        VariableDefinition {
            id: VAR_SELECTED_SCREEN,
            name: "Selected screen name",
        },
        VariableDefinition {
            id: VAR_PVW_LAYERS_COUNT,
            name: "PVW layer count (selected screen)",
        },
    ]
}

/// Current values for every exposed variable, derived from state.
pub fn variable_values(state: &DeviceState) -> HashMap<String, VariableValue> {
    let mut values = HashMap::new();
    values.insert(
        VAR_SELECTED_SCREEN.to_string(),
        VariableValue::from(
            state
                .selected_screen()
                .map(|s| s.name.as_str())
                .unwrap_or(NO_SCREEN_PLACEHOLDER),
        ),
    );
    values.insert(
        VAR_PVW_LAYERS_COUNT.to_string(),
        VariableValue::from(state.pvw_layers().len()),
    );
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PvwLayer, Screen};

    #[test]
    fn test_values_with_no_selection() {
        let state = DeviceState::default();
        let values = variable_values(&state);

        assert_eq!(
            values[VAR_SELECTED_SCREEN],
            VariableValue::from(NO_SCREEN_PLACEHOLDER)
        );
        assert_eq!(values[VAR_PVW_LAYERS_COUNT], VariableValue::from(0usize));
    }

    #[test]
    fn test_values_track_selection() {
        let mut state = DeviceState {
            selected_screen_id: Some("screen-1".to_string()),
            screens: vec![Screen {
                id: "screen-1".to_string(),
                name: "Screen 1".to_string(),
            }],
            ..Default::default()
        };
        state.pvw_layers_by_screen.insert(
            "screen-1".to_string(),
            vec![
                PvwLayer {
                    id: "L1-guid".to_string(),
                    name: "Layer 1".to_string(),
                    index: 1,
                },
                PvwLayer {
                    id: "L2-guid".to_string(),
                    name: "Layer 2".to_string(),
                    index: 2,
                },
            ],
        );

        let values = variable_values(&state);
        assert_eq!(values[VAR_SELECTED_SCREEN], VariableValue::from("Screen 1"));
        assert_eq!(values[VAR_PVW_LAYERS_COUNT], VariableValue::from(2usize));
    }

    #[test]
    fn test_definitions_match_value_keys() {
        let definitions = variable_definitions();
        let values = variable_values(&DeviceState::default());
        for definition in &definitions {
            assert!(values.contains_key(definition.id));
        }
        assert_eq!(definitions.len(), values.len());
    }
}
