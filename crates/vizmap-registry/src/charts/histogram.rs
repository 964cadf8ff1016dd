//! Histogram definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Histogram".to_string(),
        graph_type: "histogram".to_string(),
        description: "Distribution of a quantitative variable via bins".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![InputDef::required("value", "Value", "Numeric value")],
        optional_inputs: vec![
            InputDef::optional("weight", "Weight", "Optional weight for value"),
            InputDef::optional("color", "Color", "Color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
