//! Timeline definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Timeline".to_string(),
        graph_type: "timeline".to_string(),
        description: "Events positioned along a temporal axis".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![InputDef::required("date", "Date", "Event date/time")],
        optional_inputs: vec![
            InputDef::optional("label", "Label", "Event label"),
            InputDef::optional("end", "End", "End date/time for ranged events"),
            InputDef::optional("color", "Color", "Color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
