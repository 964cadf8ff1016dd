//! Sunburst definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Sunburst".to_string(),
        graph_type: "sunburst".to_string(),
        description: "Radial hierarchical partition layout".to_string(),
        shape: DataShape::Hierarchy,
        numbers: None,
        required_inputs: vec![
            InputDef::required("label", "Label", "Text to display for each node"),
            InputDef::required("value", "Value", "Node value for sizing"),
        ],
        optional_inputs: vec![
            InputDef::optional("parent", "Parent", "Reference to parent node (for nested data)"),
            InputDef::optional("children", "Children", "Array of child nodes"),
            InputDef::optional("color", "Color", "Color variable"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
