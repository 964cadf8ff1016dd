use serde_json::json;

use vizmap_model::{NormalizedRow, NumberPolicy, RoleMapping};
use vizmap_transform::{group_series, transform};

fn xs(rows: &[NormalizedRow]) -> Vec<String> {
    rows.iter().map(NormalizedRow::x_text).collect()
}

#[test]
fn time_series_sorts_chronologically_within_each_group() {
    let data = json!([
        {"day": "2024-01-03", "hits": 4, "region": "eu"},
        {"day": "2024-01-01", "hits": 9, "region": "us"},
        {"day": "2024-01-02", "hits": 7, "region": "eu"},
        {"day": "2024-01-01", "hits": 2, "region": "eu"},
    ]);
    let mapping = RoleMapping::new()
        .with_path("x", "day")
        .with_path("y", "hits")
        .with_path("group", "region");
    let rows = transform(&data, &mapping, NumberPolicy::ZeroFill);
    let series = group_series(&rows);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, "eu", "legend follows first appearance");
    assert_eq!(series[1].name, "us");
    assert!(series[0].temporal);
    assert_eq!(xs(&series[0].rows), ["2024-01-01", "2024-01-02", "2024-01-03"]);
    assert_eq!(series[0].rows[0].y, 2.0);
}

#[test]
fn one_unparseable_date_demotes_sorting_to_text() {
    let data = json!([
        {"day": "2024-01-02", "hits": 1},
        {"day": "pending", "hits": 2},
        {"day": "2024-01-01", "hits": 3},
    ]);
    let mapping = RoleMapping::new().with_path("x", "day").with_path("y", "hits");
    let series = group_series(&transform(&data, &mapping, NumberPolicy::ZeroFill));

    assert_eq!(series.len(), 1);
    assert!(!series[0].temporal, "one bad value makes the axis ordinal");
    assert_eq!(xs(&series[0].rows), ["2024-01-01", "2024-01-02", "pending"]);
}

#[test]
fn constant_group_collects_every_row() {
    let data = json!([
        {"cat": "a", "val": 1},
        {"cat": "b", "val": 2},
    ]);
    let mapping = RoleMapping::new()
        .with_path("x", "cat")
        .with_path("y", "val")
        .with_constant("group", json!("All"));
    let series = group_series(&transform(&data, &mapping, NumberPolicy::ZeroFill));

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].name, "All");
    assert_eq!(series[0].rows.len(), 2);
}

#[test]
fn namespaced_feed_columns_resolve_without_their_prefix() {
    let data = json!([
        {"ga:date": "2024-05-01", "ga:sessions": 31},
        {"ga:date": "2024-05-02", "ga:sessions": 40},
    ]);
    let mapping = RoleMapping::new()
        .with_path("x", "date")
        .with_path("y", "sessions");
    let rows = transform(&data, &mapping, NumberPolicy::ZeroFill);

    assert_eq!(rows.len(), 2, "bare names must find prefixed keys");
    assert_eq!(rows[0].y, 31.0);
}

#[test]
fn prefixed_paths_resolve_against_bare_columns() {
    let data = json!([{"date": "2024-05-01", "sessions": 31}]);
    let mapping = RoleMapping::new()
        .with_path("x", "ga:date")
        .with_path("y", "ga:sessions");
    let rows = transform(&data, &mapping, NumberPolicy::ZeroFill);

    assert_eq!(rows.len(), 1, "prefixed paths must fall back to local names");
    assert_eq!(rows[0].x, json!("2024-05-01"));
}

#[test]
fn single_element_arrays_unwrap_for_scalar_roles() {
    let data = json!([{"cat": ["a", "ignored"], "val": [3]}]);
    let mapping = RoleMapping::new().with_path("x", "cat").with_path("y", "val");
    let rows = transform(&data, &mapping, NumberPolicy::ZeroFill);

    assert_eq!(rows[0].x, json!("a"));
    assert_eq!(rows[0].y, 3.0);
}

#[test]
fn dotted_paths_reach_nested_fields() {
    let data = json!([
        {"meta": {"name": "alpha"}, "stats": {"count": "12"}},
        {"meta": {"name": "beta"}, "stats": {}},
    ]);
    let mapping = RoleMapping::new()
        .with_path("x", "meta.name")
        .with_path("y", "stats.count");
    let rows = transform(&data, &mapping, NumberPolicy::ZeroFill);

    assert_eq!(rows.len(), 1, "missing leaf drops the row before the policy runs");
    assert_eq!(rows[0].x, json!("alpha"));
    assert_eq!(rows[0].y, 12.0);
}

#[test]
fn order_reflects_input_position_even_after_drops() {
    let data = json!([
        {"cat": "a", "val": 1},
        {"cat": "b"},
        {"cat": "c", "val": 3},
    ]);
    let mapping = RoleMapping::new().with_path("x", "cat").with_path("y", "val");
    let rows = transform(&data, &mapping, NumberPolicy::DropRow);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].order, 0);
    assert_eq!(rows[1].order, 2, "dropped rows still advance the input index");
}

#[test]
fn label_and_color_decorations_come_along() {
    let data = json!([
        {"cat": "a", "val": 1, "name": "Alpha", "tint": "#ff0000"},
    ]);
    let mapping = RoleMapping::new()
        .with_path("x", "cat")
        .with_path("y", "val")
        .with_path("label", "name")
        .with_path("color", "tint");
    let rows = transform(&data, &mapping, NumberPolicy::ZeroFill);

    assert_eq!(rows[0].label.as_deref(), Some("Alpha"));
    assert_eq!(rows[0].color.as_deref(), Some("#ff0000"));
    assert_eq!(rows[0].group, "_default");
}
