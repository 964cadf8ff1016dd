use serde_json::json;

use vizmap_model::{HierarchyNode, RoleMapping};
use vizmap_transform::build_hierarchy;

fn edge_mapping() -> RoleMapping {
    RoleMapping::new()
        .with_path("source", "s")
        .with_path("target", "t")
}

fn parent_mapping() -> RoleMapping {
    RoleMapping::new()
        .with_path("label", "label")
        .with_path("parent", "parent")
}

/// Every node materialized by a build must be reachable exactly once.
fn assert_single_tree(root: &HierarchyNode, expected_nodes: usize) {
    assert_eq!(
        root.count(),
        expected_nodes,
        "reachable node count must equal distinct created nodes"
    );
}

#[test]
fn edge_list_chain_builds_single_root() {
    let raw = json!([
        {"s": "A", "t": "B"},
        {"s": "B", "t": "C"},
    ]);
    let tree = build_hierarchy(&raw, &edge_mapping());

    assert_eq!(tree.label, "A", "single root passes through unwrapped");
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.children[0].label, "B");
    assert_eq!(tree.children[0].children[0].label, "C");
    assert_single_tree(&tree, 3);
}

#[test]
fn edge_list_forest_gets_synthetic_root() {
    let raw = json!([
        {"s": "A", "t": "B"},
        {"s": "C", "t": "D"},
    ]);
    let tree = build_hierarchy(&raw, &edge_mapping());

    assert_eq!(tree.label, "Root");
    let roots: Vec<&str> = tree.children.iter().map(|child| child.label.as_str()).collect();
    assert_eq!(roots, ["A", "C"]);
    assert_single_tree(&tree, 5);
}

#[test]
fn edge_list_last_parent_wins() {
    let raw = json!([
        {"s": "A", "t": "C"},
        {"s": "B", "t": "C"},
    ]);
    let tree = build_hierarchy(&raw, &edge_mapping());

    // A and B stay roots; C hangs under B, the later edge.
    assert_eq!(tree.label, "Root");
    let a = &tree.children[0];
    let b = &tree.children[1];
    assert!(a.is_leaf(), "earlier parent loses the child");
    assert_eq!(b.children[0].label, "C");
    assert_single_tree(&tree, 4);
}

#[test]
fn edge_list_cycle_leaves_empty_root() {
    let raw = json!([
        {"s": "A", "t": "B"},
        {"s": "B", "t": "A"},
    ]);
    let tree = build_hierarchy(&raw, &edge_mapping());
    assert_eq!(tree.label, "Root");
    assert!(tree.is_leaf(), "cycle members are unreachable from any root");
}

#[test]
fn parent_reference_builds_from_labels() {
    let raw = json!([
        {"label": "X", "parent": null},
        {"label": "Y", "parent": "X"},
    ]);
    let tree = build_hierarchy(&raw, &parent_mapping());

    assert_eq!(tree.label, "X");
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].label, "Y");
    assert_single_tree(&tree, 2);
}

#[test]
fn parent_reference_dedups_labels_and_keeps_last_value() {
    let raw = json!([
        {"label": "X"},
        {"label": "Y", "parent": "X", "size": 1},
        {"label": "Y", "parent": "X", "size": 9},
    ]);
    let mapping = parent_mapping().with_path("value", "size");
    let tree = build_hierarchy(&raw, &mapping);

    assert_eq!(tree.children.len(), 1, "duplicate label must not duplicate node");
    assert_eq!(tree.children[0].value, Some(9.0), "later row overwrites value");
    assert_single_tree(&tree, 2);
}

#[test]
fn parent_reference_creates_implicit_parents() {
    let raw = json!([
        {"label": "leaf", "parent": "ghost"},
    ]);
    let tree = build_hierarchy(&raw, &parent_mapping());

    assert_eq!(tree.label, "ghost", "referenced parent becomes a real root");
    assert_eq!(tree.children[0].label, "leaf");
    assert_single_tree(&tree, 2);
}

#[test]
fn nested_children_wraps_arrays_under_root() {
    let raw = json!([
        {"name": "a", "kids": [{"name": "a1"}, {"name": "a2"}]},
        {"name": "b"},
    ]);
    let mapping = RoleMapping::new()
        .with_path("label", "name")
        .with_path("children", "kids");
    let tree = build_hierarchy(&raw, &mapping);

    assert_eq!(tree.label, "Root");
    assert_eq!(tree.children[0].children.len(), 2);
    assert_eq!(tree.children[0].children[1].label, "a2");
    assert_single_tree(&tree, 5);
}

#[test]
fn nested_children_labels_missing_nodes() {
    let raw = json!({"kids": [{"v": 1}, {"v": 2}]});
    let mapping = RoleMapping::new()
        .with_path("label", "name")
        .with_path("children", "kids")
        .with_path("value", "v");
    let tree = build_hierarchy(&raw, &mapping);

    assert_eq!(tree.label, "Root", "unlabeled root takes the root default");
    assert_eq!(tree.children[0].label, "Node");
    assert_eq!(tree.children[0].value, Some(1.0));
}

#[test]
fn plain_array_fallback_numbers_items() {
    let raw = json!([{"v": 1}, {"v": 2}, {"v": 3}]);
    let tree = build_hierarchy(&raw, &RoleMapping::new());

    assert_eq!(tree.label, "Root");
    let labels: Vec<&str> = tree.children.iter().map(|child| child.label.as_str()).collect();
    assert_eq!(labels, ["Item 0", "Item 1", "Item 2"]);
    assert_single_tree(&tree, 4);
}

#[test]
fn scalar_fallback_is_a_childless_root() {
    let tree = build_hierarchy(&json!(17), &RoleMapping::new());
    assert_eq!(tree.label, "Root");
    assert!(tree.is_leaf());
}
