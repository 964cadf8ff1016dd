//! Dendrogram definition (preview renderer).

use vizmap_model::{DataShape, GraphDefinition, InputDef};

use crate::module::ChartModule;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Dendrogram".to_string(),
        graph_type: "dendrogram".to_string(),
        description: "Dendrogram cluster layout".to_string(),
        shape: DataShape::Hierarchy,
        numbers: None,
        required_inputs: vec![InputDef::required(
            "label",
            "Label",
            "Text to display for each node",
        )],
        optional_inputs: vec![
            InputDef::optional("value", "Value", "Numeric or text value for the node"),
            InputDef::optional("parent", "Parent", "Reference to parent node (for nested data)"),
            InputDef::optional("children", "Children", "Array of child nodes"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    super::preview(definition())
}
