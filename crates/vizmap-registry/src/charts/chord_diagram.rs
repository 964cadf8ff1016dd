//! Chord diagram definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Chord Diagram".to_string(),
        graph_type: "chord-diagram".to_string(),
        description: "Matrix of flows between groups represented as chords".to_string(),
        shape: DataShape::Network,
        numbers: None,
        required_inputs: vec![
            InputDef::required("source", "Source", "Source group"),
            InputDef::required("target", "Target", "Target group"),
            InputDef::required("value", "Value", "Flow value"),
        ],
        optional_inputs: vec![InputDef::optional("color", "Color", "Group color variable")],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
