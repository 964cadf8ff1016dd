//! Arc diagram definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Arc Diagram".to_string(),
        graph_type: "arc-diagram".to_string(),
        description: "Linear arrangement of nodes with arcs for links".to_string(),
        shape: DataShape::Network,
        numbers: None,
        required_inputs: vec![
            InputDef::required("source", "Source", "Link source id"),
            InputDef::required("target", "Target", "Link target id"),
        ],
        optional_inputs: vec![
            InputDef::optional("value", "Value", "Link value/weight"),
            InputDef::optional("group", "Group", "Node group/category"),
            InputDef::optional("color", "Color", "Color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
