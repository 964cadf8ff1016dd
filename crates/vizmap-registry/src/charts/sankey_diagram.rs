//! Sankey diagram definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Sankey Diagram".to_string(),
        graph_type: "sankey-diagram".to_string(),
        description: "Flow diagram emphasizing major transfers between nodes".to_string(),
        shape: DataShape::Network,
        numbers: None,
        required_inputs: vec![
            InputDef::required("source", "Source", "Source node id"),
            InputDef::required("target", "Target", "Target node id"),
            InputDef::required("value", "Value", "Flow value"),
        ],
        optional_inputs: vec![
            InputDef::optional("group", "Group", "Node group/category"),
            InputDef::optional("color", "Color", "Color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
