//! Word cloud definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Word Cloud".to_string(),
        graph_type: "word-cloud".to_string(),
        description: "Visual prominence of words sized by frequency/value".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![
            InputDef::required("text", "Text", "Word/term"),
            InputDef::required("value", "Value", "Frequency/value"),
        ],
        optional_inputs: vec![
            InputDef::optional("color", "Color", "Color variable"),
            InputDef::optional("rotate", "Rotate", "Rotation variable/flag"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
