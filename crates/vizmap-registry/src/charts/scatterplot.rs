//! Scatterplot definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Scatterplot".to_string(),
        graph_type: "scatterplot".to_string(),
        description: "Plots points by two quantitative variables".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![
            InputDef::required("x", "X", "X axis value"),
            InputDef::required("y", "Y", "Y axis value"),
        ],
        optional_inputs: vec![
            InputDef::optional("size", "Size", "Point size variable"),
            InputDef::optional("color", "Color", "Color variable"),
            InputDef::optional("series", "Series", "Grouping/series variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
