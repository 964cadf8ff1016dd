//! Area chart definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef, NumberPolicy};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Area Chart".to_string(),
        graph_type: "area-chart".to_string(),
        description: "Area chart showing cumulative magnitude over x".to_string(),
        shape: DataShape::Rows,
        numbers: Some(NumberPolicy::DropRow),
        required_inputs: vec![
            InputDef::required("x", "X", "X axis (numeric/date)"),
            InputDef::required("y", "Y", "Y value"),
        ],
        optional_inputs: vec![
            InputDef::optional("series", "Series", "Series/category grouping"),
            InputDef::optional("color", "Color", "Color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
