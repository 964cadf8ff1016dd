//! Bubble chart definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Bubble Chart".to_string(),
        graph_type: "bubble-chart".to_string(),
        description: "Scatterplot variant with varying point sizes".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![
            InputDef::required("x", "X", "X axis value"),
            InputDef::required("y", "Y", "Y axis value"),
            InputDef::required("size", "Size", "Bubble size value"),
        ],
        optional_inputs: vec![
            InputDef::optional("color", "Color", "Color variable"),
            InputDef::optional("series", "Series", "Grouping variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
