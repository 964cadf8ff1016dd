//! Tree: hierarchical parent-child outline.

use vizmap_model::{
    ChartData, DataShape, GraphDefinition, HierarchyNode, InputDef, RenderConfig, RoleMapping,
};

use crate::container::Container;
use crate::error::{RenderError, Result};
use crate::module::ChartModule;

use super::scene_title;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Tree".to_string(),
        graph_type: "tree".to_string(),
        description: "Hierarchical tree visualization showing parent-child relationships"
            .to_string(),
        shape: DataShape::Hierarchy,
        numbers: None,
        // Value, parent, and children ride along in the required list
        // without the required flag, so validation never demands them.
        required_inputs: vec![
            InputDef::required("label", "Label", "Text to display for each node"),
            InputDef::optional("value", "Value", "Numeric or text value for the node"),
            InputDef::optional("parent", "Parent", "Reference to parent node (for nested data)"),
            InputDef::optional("children", "Children", "Array of child nodes"),
        ],
        optional_inputs: vec![
            InputDef::optional("id", "Unique ID", "Unique identifier for each node"),
            InputDef::optional("color", "Color", "Color value or category for styling"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    Box::new(Tree {
        definition: definition(),
    })
}

struct Tree {
    definition: GraphDefinition,
}

impl ChartModule for Tree {
    fn definition(&self) -> &GraphDefinition {
        &self.definition
    }

    fn render(
        &self,
        container: &mut Container,
        data: &ChartData,
        _mapping: &RoleMapping,
        config: &RenderConfig,
    ) -> Result<()> {
        let Some(root) = data.as_tree() else {
            return Err(RenderError::ShapeMismatch {
                expected: DataShape::Hierarchy,
                actual: data.shape(),
            });
        };

        let mut lines = Vec::with_capacity(root.count() + 1);
        lines.push(format!("{} nodes, depth {}", root.count(), root.depth()));
        outline(root, 0, &mut lines);

        container.scene(scene_title(config, &self.definition), lines);
        Ok(())
    }
}

fn outline(node: &HierarchyNode, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node.value {
        Some(value) => lines.push(format!("{indent}{} ({value})", node.label)),
        None => lines.push(format!("{indent}{}", node.label)),
    }
    for child in &node.children {
        outline(child, depth + 1, lines);
    }
}
