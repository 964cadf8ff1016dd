//! Calendar heatmap definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Calendar Heatmap".to_string(),
        graph_type: "calendar-heatmap".to_string(),
        description: "Daily values laid out over calendar months".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![
            InputDef::required("date", "Date", "Date value"),
            InputDef::required("value", "Value", "Measurement per day"),
        ],
        optional_inputs: vec![InputDef::optional(
            "color",
            "Color",
            "Color variable (default is value)",
        )],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
