use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::definition::DataShape;

/// Group sentinel for rows whose mapping has no `group` role.
pub const DEFAULT_GROUP: &str = "_default";

/// One flat data point for XY/categorical charts.
///
/// `x` keeps the resolved JSON value so temporal detection can inspect
/// the original string; `order` is the row's index in the input sequence
/// and fixes first-appearance ordering after sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub x: Value,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub group: String,
    pub order: usize,
}

impl NormalizedRow {
    /// Display form of `x` for axis labels and legends.
    pub fn x_text(&self) -> String {
        match &self.x {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    pub fn x_str(&self) -> Option<&str> {
        self.x.as_str()
    }

    pub fn x_number(&self) -> Option<f64> {
        match &self.x {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A node in a rooted tree. Children are owned by their parent, so the
/// structure is acyclic and single-parent by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn new(label: impl Into<String>) -> Self {
        HierarchyNode {
            label: label.into(),
            value: None,
            children: Vec::new(),
        }
    }

    pub fn with_value(label: impl Into<String>, value: f64) -> Self {
        HierarchyNode {
            label: label.into(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes reachable from this one, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::count).sum::<usize>()
    }

    /// Longest root-to-leaf path length, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(HierarchyNode::depth)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// Node/link data for force and flow charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

impl NetworkData {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

/// Data handed to a chart module, in the shape its definition declares.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Rows(Vec<NormalizedRow>),
    Tree(HierarchyNode),
    Network(NetworkData),
    Raw(Value),
}

impl ChartData {
    pub fn shape(&self) -> DataShape {
        match self {
            ChartData::Rows(_) => DataShape::Rows,
            ChartData::Tree(_) => DataShape::Hierarchy,
            ChartData::Network(_) => DataShape::Network,
            ChartData::Raw(_) => DataShape::Raw,
        }
    }

    pub fn as_rows(&self) -> Option<&[NormalizedRow]> {
        match self {
            ChartData::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&HierarchyNode> {
        match self {
            ChartData::Tree(root) => Some(root),
            _ => None,
        }
    }

    pub fn as_network(&self) -> Option<&NetworkData> {
        match self {
            ChartData::Network(network) => Some(network),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            ChartData::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// One-line description used in logs and rendered scenes.
    pub fn summary(&self) -> String {
        match self {
            ChartData::Rows(rows) => format!("{} rows", rows.len()),
            ChartData::Tree(root) => format!("{} nodes, depth {}", root.count(), root.depth()),
            ChartData::Network(network) => format!(
                "{} nodes / {} links",
                network.nodes.len(),
                network.links.len()
            ),
            ChartData::Raw(value) => match value {
                Value::Array(items) => format!("raw array of {}", items.len()),
                Value::Object(fields) => format!("raw object with {} keys", fields.len()),
                _ => "raw scalar".to_string(),
            },
        }
    }
}
