//! Tree construction from flat or nested input.
//!
//! Strategy selection, in priority order: explicit nested children, then
//! parent-reference rows, then an edge list, then a structural fallback
//! that never fails. Whatever the input, the output is a single rooted
//! tree whose children are owned by their parent.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::debug;

use vizmap_model::{HierarchyNode, RoleMapping};

use crate::source::Source;

const ROOT_LABEL: &str = "Root";
const CHILD_LABEL: &str = "Node";

fn item_label(index: usize) -> String {
    format!("Item {index}")
}

/// Builds a hierarchy from `raw` using the first strategy the mapping
/// supports. Structural mismatches degrade to the fallback; this never
/// fails.
pub fn build_hierarchy(raw: &Value, mapping: &RoleMapping) -> HierarchyNode {
    if mapping.contains("children") {
        debug!(strategy = "nested-children", "building hierarchy");
        let roles = NestedRoles::new(mapping);
        nested_root(raw, &roles)
    } else if let Value::Array(rows) = raw {
        if mapping.contains("parent") {
            debug!(
                strategy = "parent-reference",
                rows = rows.len(),
                "building hierarchy"
            );
            parent_reference(rows, mapping)
        } else if mapping.contains("source") && mapping.contains("target") {
            debug!(strategy = "edge-list", rows = rows.len(), "building hierarchy");
            edge_list(rows, mapping)
        } else {
            debug!(strategy = "fallback", rows = rows.len(), "building hierarchy");
            flat_fallback(rows, mapping)
        }
    } else {
        debug!(strategy = "fallback", "building hierarchy from non-array input");
        bare_fallback(raw, mapping)
    }
}

struct NestedRoles {
    label: Option<Source>,
    value: Option<Source>,
    children: Option<Source>,
}

impl NestedRoles {
    fn new(mapping: &RoleMapping) -> Self {
        NestedRoles {
            label: Source::from_role(mapping, "label"),
            value: Source::from_role(mapping, "value"),
            children: Source::from_role(mapping, "children"),
        }
    }
}

fn nested_root(raw: &Value, roles: &NestedRoles) -> HierarchyNode {
    match raw {
        Value::Array(items) => {
            let mut root = HierarchyNode::new(ROOT_LABEL);
            root.children = items
                .iter()
                .enumerate()
                .map(|(index, item)| nested_node(item, roles, &item_label(index)))
                .collect();
            root
        }
        other => nested_node(other, roles, ROOT_LABEL),
    }
}

fn nested_node(value: &Value, roles: &NestedRoles, fallback: &str) -> HierarchyNode {
    let mut node = HierarchyNode {
        label: label_text(roles.label.as_ref(), value).unwrap_or_else(|| fallback.to_string()),
        value: roles.value.as_ref().and_then(|source| source.number(value)),
        children: Vec::new(),
    };
    // Children resolve without the scalar unwrap so arrays stay whole.
    if let Some(Value::Array(items)) = roles
        .children
        .as_ref()
        .and_then(|source| source.lookup(value))
    {
        node.children = items
            .iter()
            .map(|child| nested_node(child, roles, CHILD_LABEL))
            .collect();
    }
    node
}

fn parent_reference(rows: &[Value], mapping: &RoleMapping) -> HierarchyNode {
    let label_role = Source::from_role(mapping, "label");
    let value_role = Source::from_role(mapping, "value");
    let parent_role = Source::from_role(mapping, "parent");

    let mut labels: Vec<String> = Vec::new();
    let mut values: HashMap<String, Option<f64>> = HashMap::new();
    let mut parent_of: HashMap<String, String> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        let label =
            label_text(label_role.as_ref(), row).unwrap_or_else(|| item_label(index));
        if !values.contains_key(&label) {
            labels.push(label.clone());
            values.insert(label.clone(), None);
        }
        // Later rows with the same label overwrite the value but do not
        // duplicate the node.
        if let Some(value) = value_role.as_ref().and_then(|source| source.number(row)) {
            values.insert(label.clone(), Some(value));
        }
        if let Some(parent) = label_text(parent_role.as_ref(), row) {
            if !values.contains_key(&parent) {
                // Parent referenced but never defined by a row of its own.
                labels.push(parent.clone());
                values.insert(parent.clone(), None);
            }
            parent_of.insert(label.clone(), parent);
        }
    }

    assemble(&labels, &values, &parent_of)
}

fn edge_list(rows: &[Value], mapping: &RoleMapping) -> HierarchyNode {
    let source_role = Source::from_role(mapping, "source");
    let target_role = Source::from_role(mapping, "target");

    let mut ids: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut parent_of: HashMap<String, String> = HashMap::new();

    for row in rows {
        let Some(source_id) = source_role.as_ref().and_then(|source| source.text(row)) else {
            continue;
        };
        let Some(target_id) = target_role.as_ref().and_then(|source| source.text(row)) else {
            continue;
        };
        for id in [&source_id, &target_id] {
            if seen.insert((*id).clone()) {
                ids.push((*id).clone());
            }
        }
        if let Some(previous) = parent_of.insert(target_id.clone(), source_id.clone())
            && previous != source_id
        {
            debug!(
                target = %target_id,
                dropped = %previous,
                kept = %source_id,
                "target has multiple parents; last edge wins"
            );
        }
    }

    assemble(&ids, &HashMap::new(), &parent_of)
}

fn flat_fallback(rows: &[Value], mapping: &RoleMapping) -> HierarchyNode {
    let label_role = Source::from_role(mapping, "label");
    let value_role = Source::from_role(mapping, "value");

    let mut root = HierarchyNode::new(ROOT_LABEL);
    root.children = rows
        .iter()
        .enumerate()
        .map(|(index, row)| HierarchyNode {
            label: label_text(label_role.as_ref(), row).unwrap_or_else(|| item_label(index)),
            value: value_role.as_ref().and_then(|source| source.number(row)),
            children: Vec::new(),
        })
        .collect();
    root
}

fn bare_fallback(raw: &Value, mapping: &RoleMapping) -> HierarchyNode {
    let label_role = Source::from_role(mapping, "label");
    let value_role = Source::from_role(mapping, "value");

    HierarchyNode {
        label: label_text(label_role.as_ref(), raw).unwrap_or_else(|| ROOT_LABEL.to_string()),
        value: value_role.as_ref().and_then(|source| source.number(raw)),
        children: Vec::new(),
    }
}

/// Materializes the ownership tree from a parent table. A single root
/// passes through; zero or several roots get wrapped in a synthetic
/// `Root`. Nodes caught in a parent cycle are unreachable from any root
/// and are left out.
fn assemble(
    labels: &[String],
    values: &HashMap<String, Option<f64>>,
    parent_of: &HashMap<String, String>,
) -> HierarchyNode {
    let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
    for label in labels {
        if let Some(parent) = parent_of.get(label) {
            children_of
                .entry(parent.as_str())
                .or_default()
                .push(label.as_str());
        }
    }
    let roots: Vec<&str> = labels
        .iter()
        .map(String::as_str)
        .filter(|label| !parent_of.contains_key(*label))
        .collect();

    if let [single] = roots.as_slice() {
        attach(single, values, &children_of)
    } else {
        let mut root = HierarchyNode::new(ROOT_LABEL);
        root.children = roots
            .iter()
            .map(|label| attach(label, values, &children_of))
            .collect();
        root
    }
}

fn attach(
    label: &str,
    values: &HashMap<String, Option<f64>>,
    children_of: &HashMap<&str, Vec<&str>>,
) -> HierarchyNode {
    HierarchyNode {
        label: label.to_string(),
        value: values.get(label).copied().flatten(),
        children: children_of
            .get(label)
            .into_iter()
            .flatten()
            .map(|child| attach(child, values, children_of))
            .collect(),
    }
}

fn label_text(source: Option<&Source>, element: &Value) -> Option<String> {
    source
        .and_then(|source| source.text(element))
        .filter(|text| !text.trim().is_empty())
}
