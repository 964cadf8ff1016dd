//! Heatmap definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Heatmap".to_string(),
        graph_type: "heatmap".to_string(),
        description: "Matrix of color-encoded values".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![
            InputDef::required("x", "X", "Column/variable"),
            InputDef::required("y", "Y", "Row/variable"),
            InputDef::required("value", "Value", "Cell value"),
        ],
        optional_inputs: vec![InputDef::optional(
            "color",
            "Color",
            "Color variable (default value)",
        )],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
