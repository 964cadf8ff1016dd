//! Donut chart definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Donut Chart".to_string(),
        graph_type: "donut-chart".to_string(),
        description: "Ring-shaped variant of pie chart".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![InputDef::required("value", "Value", "Slice value")],
        optional_inputs: vec![
            InputDef::optional("category", "Category", "Slice category label"),
            InputDef::optional("color", "Color", "Color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
