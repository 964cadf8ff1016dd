//! World map definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "World Map".to_string(),
        graph_type: "world-map".to_string(),
        description: "Plots data points on a world map using longitude/latitude".to_string(),
        shape: DataShape::Raw,
        numbers: None,
        required_inputs: vec![
            InputDef::required("longitude", "Longitude", "Longitude coordinate"),
            InputDef::required("latitude", "Latitude", "Latitude coordinate"),
            InputDef::required("label", "Label", "Point label (e.g., country name)"),
        ],
        optional_inputs: vec![
            InputDef::optional("value", "Value", "Numeric value (for size or color scaling)"),
            InputDef::optional("color", "Color", "Color category or field"),
            InputDef::optional("group", "Group", "Grouping field"),
            InputDef::optional("capital", "Capital City", "Capital city name"),
            InputDef::optional("income", "Income Level", "Income level classification"),
            InputDef::optional("region", "Region", "Geographic region"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
