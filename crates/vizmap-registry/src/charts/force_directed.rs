//! Force-directed network: nodes, links, and group makeup.

use std::collections::BTreeMap;

use vizmap_model::{ChartData, DataShape, GraphDefinition, InputDef, RenderConfig, RoleMapping};

use crate::container::Container;
use crate::error::{RenderError, Result};
use crate::module::ChartModule;

use super::scene_title;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Force-Directed".to_string(),
        graph_type: "force-directed".to_string(),
        description: "Network visualization showing relationships and connections between entities"
            .to_string(),
        shape: DataShape::Network,
        numbers: None,
        required_inputs: vec![
            InputDef::required("source", "Source", "Source node identifier for links"),
            InputDef::required("target", "Target", "Target node identifier for links"),
        ],
        optional_inputs: vec![
            InputDef::optional(
                "value",
                "Value/Weight",
                "Numeric value representing link strength or weight",
            ),
            InputDef::optional(
                "group",
                "Group/Category",
                "Category for node grouping and coloring",
            ),
            InputDef::optional("label", "Label", "Text label to display for nodes"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    Box::new(ForceDirected {
        definition: definition(),
    })
}

struct ForceDirected {
    definition: GraphDefinition,
}

impl ChartModule for ForceDirected {
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
        let Some(network) = data.as_network() else {
            return Err(RenderError::ShapeMismatch {
                expected: DataShape::Network,
                actual: data.shape(),
            });
        };

        let mut lines = Vec::with_capacity(network.links.len() + 2);
        lines.push(format!(
            "{} nodes, {} links",
            network.nodes.len(),
            network.links.len()
        ));

        let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
        for node in &network.nodes {
            if let Some(group) = &node.group {
                *groups.entry(group.as_str()).or_default() += 1;
            }
        }
        if !groups.is_empty() {
            let makeup: Vec<String> = groups
                .iter()
                .map(|(group, members)| format!("{group} ({members})"))
                .collect();
            lines.push(format!("groups: {}", makeup.join(", ")));
        }

        for link in &network.links {
            lines.push(format!("{} -> {} ({})", link.source, link.target, link.value));
        }

        container.scene(scene_title(config, &self.definition), lines);
        Ok(())
    }
}
