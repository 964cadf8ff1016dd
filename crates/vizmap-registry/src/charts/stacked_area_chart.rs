//! Stacked area chart definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef, NumberPolicy};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Stacked Area Chart".to_string(),
        graph_type: "stacked-area-chart".to_string(),
        description: "Area chart stacking multiple series over x".to_string(),
        shape: DataShape::Rows,
        numbers: Some(NumberPolicy::DropRow),
        required_inputs: vec![
            InputDef::required("x", "X", "X axis (numeric/date)"),
            InputDef::required("y", "Y", "Y value"),
            InputDef::required("series", "Series", "Series/category"),
        ],
        optional_inputs: vec![InputDef::optional(
            "color",
            "Color",
            "Color variable (default series)",
        )],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
