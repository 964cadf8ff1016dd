use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vizmap_model::{MappingValue, RoleMapping};

/// Persisted workspace configuration, in the camelCase dialect the
/// config files store.
///
/// ```json
/// { "dataSource": { "apiResponse": "worldbank.json" },
///   "visualization": {
///     "rowPath": "1",
///     "graphs": { "bar-chart": { "mappings": { "x": "date", "y": "value" } } } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceConfig {
    pub data_source: DataSource,
    pub visualization: Visualization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_response: Option<DataSourceRef>,
}

/// The raw data feed: a file name resolved by the caller, or the data
/// itself inlined into the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSourceRef {
    File(String),
    Inline(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Visualization {
    /// Workspace-wide default row path, overridable per graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_path: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub graphs: BTreeMap<String, GraphConfig>,

    /// Legacy single-graph form; folded into `graphs` by `normalize`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<RoleMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphConfig {
    pub mappings: RoleMapping,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_path: Option<String>,
}

impl GraphConfig {
    /// Older configs tuck the row path in with the role mappings. Pull
    /// it out so it never reaches role validation; an explicit
    /// `rowPath` field wins over the legacy placement.
    fn hoist_row_path(&mut self) {
        let Some(value) = self.mappings.remove("rowPath") else {
            return;
        };
        if self.row_path.is_some() {
            return;
        }
        self.row_path = match value {
            MappingValue::Path(path) => Some(path),
            MappingValue::Constant(other) => other.as_str().map(str::to_string),
        };
    }
}

impl WorkspaceConfig {
    /// Rewrites the config into the modern multi-graph dialect: a
    /// legacy top-level `graphType` + `mappings` pair becomes a
    /// one-entry `graphs` map, and per-graph row paths are hoisted out
    /// of the mappings. Idempotent.
    pub fn normalize(&mut self) {
        if self.visualization.graphs.is_empty()
            && let Some(graph_type) = self.visualization.graph_type.take()
        {
            let mappings = self.visualization.mappings.take().unwrap_or_default();
            self.visualization.graphs.insert(
                graph_type,
                GraphConfig {
                    mappings,
                    row_path: None,
                },
            );
        }
        self.visualization.graph_type = None;
        self.visualization.mappings = None;

        for graph in self.visualization.graphs.values_mut() {
            graph.hoist_row_path();
        }
    }

    /// The row path a graph should use: its own, else the workspace
    /// default.
    pub fn row_path_for<'a>(&'a self, graph: &'a GraphConfig) -> Option<&'a str> {
        graph
            .row_path
            .as_deref()
            .or(self.visualization.row_path.as_deref())
    }
}
