//! Radar chart definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Radar Chart".to_string(),
        graph_type: "radar-chart".to_string(),
        description: "Displays multivariate data across radial axes".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![
            InputDef::required("variable", "Variable", "Variable name/dimension"),
            InputDef::required("value", "Value", "Value for variable"),
        ],
        optional_inputs: vec![
            InputDef::optional("series", "Series", "Grouping/series"),
            InputDef::optional("color", "Color", "Series color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
