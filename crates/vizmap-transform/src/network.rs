//! Node/link construction for force and flow charts.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use vizmap_model::{NetworkData, NetworkLink, NetworkNode, RoleMapping};

use crate::source::Source;

/// Builds node/link data from `raw`.
///
/// Array input: one link per row that resolves both `source` and
/// `target`; nodes are deduplicated by identifier on first sight, where
/// the first row also decides a node's `label` and `group`. Object input
/// degrades to a synthetic root joined to one node per key. Anything
/// else yields empty data.
pub fn build_network(raw: &Value, mapping: &RoleMapping) -> NetworkData {
    match raw {
        Value::Array(rows) => from_rows(rows, mapping),
        Value::Object(fields) => {
            debug!(
                keys = fields.len(),
                "network input is an object; linking keys to a synthetic root"
            );
            from_object(fields)
        }
        _ => NetworkData::default(),
    }
}

struct NetworkRoles {
    source: Option<Source>,
    target: Option<Source>,
    value: Option<Source>,
    group: Option<Source>,
    label: Option<Source>,
}

impl NetworkRoles {
    fn new(mapping: &RoleMapping) -> Self {
        NetworkRoles {
            source: Source::from_role(mapping, "source"),
            target: Source::from_role(mapping, "target"),
            value: Source::from_role(mapping, "value"),
            group: Source::from_role(mapping, "group"),
            label: Source::from_role(mapping, "label"),
        }
    }
}

fn from_rows(rows: &[Value], mapping: &RoleMapping) -> NetworkData {
    let roles = NetworkRoles::new(mapping);
    let mut network = NetworkData::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut skipped = 0usize;

    for row in rows {
        let source_id = roles.source.as_ref().and_then(|source| source.text(row));
        let target_id = roles.target.as_ref().and_then(|source| source.text(row));
        let (Some(source_id), Some(target_id)) = (source_id, target_id) else {
            skipped += 1;
            continue;
        };

        if seen.insert(source_id.clone()) {
            network.nodes.push(NetworkNode {
                id: source_id.clone(),
                label: roles
                    .label
                    .as_ref()
                    .and_then(|source| source.text(row))
                    .unwrap_or_else(|| source_id.clone()),
                group: roles.group.as_ref().and_then(|source| source.text(row)),
            });
        }
        if seen.insert(target_id.clone()) {
            network.nodes.push(NetworkNode {
                id: target_id.clone(),
                label: target_id.clone(),
                group: None,
            });
        }
        network.links.push(NetworkLink {
            source: source_id,
            target: target_id,
            value: roles
                .value
                .as_ref()
                .and_then(|source| source.number(row))
                .unwrap_or(1.0),
        });
    }

    if skipped > 0 {
        debug!(skipped, "skipped rows without both endpoints");
    }
    network
}

fn from_object(fields: &Map<String, Value>) -> NetworkData {
    let mut network = NetworkData::default();
    network.nodes.push(NetworkNode {
        id: "root".to_string(),
        label: "Root".to_string(),
        group: None,
    });
    for key in fields.keys() {
        network.nodes.push(NetworkNode {
            id: key.clone(),
            label: key.clone(),
            group: None,
        });
        network.links.push(NetworkLink {
            source: "root".to_string(),
            target: key.clone(),
            value: 1.0,
        });
    }
    network
}
