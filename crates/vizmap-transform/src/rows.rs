//! Flat-row transformation for XY/categorical charts.

use std::cmp::Ordering;

use serde_json::Value;
use tracing::debug;

use vizmap_model::{DEFAULT_GROUP, NormalizedRow, NumberPolicy, RoleMapping};

use crate::source::{Source, coerce_number};
use crate::temporal::{detect_temporal, parse_point};

struct RowRoles {
    x: Option<Source>,
    y: Option<Source>,
    label: Option<Source>,
    color: Option<Source>,
    group: Option<Source>,
}

impl RowRoles {
    fn new(mapping: &RoleMapping) -> Self {
        RowRoles {
            x: Source::from_role(mapping, "x"),
            y: Source::from_role(mapping, "y"),
            label: Source::from_role(mapping, "label"),
            color: Source::from_role(mapping, "color"),
            group: Source::from_role(mapping, "group"),
        }
    }
}

/// Converts raw JSON into normalized rows per the mapping.
///
/// Array input: one candidate row per element; rows whose `x` or `y`
/// resolves to nothing (or null) are dropped silently, since charts must
/// tolerate sparse data. Object input: one candidate row per key, the
/// key standing in for a missing `x` and, for scalar values, the value
/// standing in for `y`. `numbers` decides what happens to a present but
/// non-numeric `y`: zero-filled or dropped.
pub fn transform(data: &Value, mapping: &RoleMapping, numbers: NumberPolicy) -> Vec<NormalizedRow> {
    let roles = RowRoles::new(mapping);
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    match data {
        Value::Array(elements) => {
            for (order, element) in elements.iter().enumerate() {
                match array_row(element, &roles, numbers, order) {
                    Some(row) => rows.push(row),
                    None => dropped += 1,
                }
            }
        }
        Value::Object(fields) => {
            for (order, (key, value)) in fields.iter().enumerate() {
                match object_row(key, value, &roles, numbers, order) {
                    Some(row) => rows.push(row),
                    None => dropped += 1,
                }
            }
        }
        _ => {}
    }

    if dropped > 0 {
        debug!(dropped, kept = rows.len(), "dropped rows with unresolvable x/y");
    }
    rows
}

fn array_row(
    element: &Value,
    roles: &RowRoles,
    numbers: NumberPolicy,
    order: usize,
) -> Option<NormalizedRow> {
    let x = roles.x.as_ref()?.lookup_scalar(element)?.clone();
    let y_raw = roles.y.as_ref()?.lookup_scalar(element)?;
    let y = numeric_y(y_raw, numbers)?;
    Some(decorated_row(x, y, element, roles, order))
}

fn object_row(
    key: &str,
    value: &Value,
    roles: &RowRoles,
    numbers: NumberPolicy,
    order: usize,
) -> Option<NormalizedRow> {
    if value.is_object() {
        let x = roles
            .x
            .as_ref()
            .and_then(|source| source.lookup_scalar(value))
            .cloned()
            .unwrap_or_else(|| Value::String(key.to_string()));
        let y = match roles.y.as_ref().and_then(|source| source.lookup_scalar(value)) {
            Some(y_raw) => numeric_y(y_raw, numbers)?,
            None => match numbers {
                NumberPolicy::ZeroFill => 0.0,
                NumberPolicy::DropRow => return None,
            },
        };
        Some(decorated_row(x, y, value, roles, order))
    } else {
        let x = Value::String(key.to_string());
        let y = numeric_y(value, numbers)?;
        Some(decorated_row(x, y, value, roles, order))
    }
}

fn decorated_row(
    x: Value,
    y: f64,
    element: &Value,
    roles: &RowRoles,
    order: usize,
) -> NormalizedRow {
    NormalizedRow {
        x,
        y,
        label: roles.label.as_ref().and_then(|source| source.text(element)),
        color: roles.color.as_ref().and_then(|source| source.text(element)),
        group: roles
            .group
            .as_ref()
            .and_then(|source| source.text(element))
            .unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        order,
    }
}

fn numeric_y(value: &Value, numbers: NumberPolicy) -> Option<f64> {
    match coerce_number(value) {
        Some(number) => Some(number),
        None => match numbers {
            NumberPolicy::ZeroFill => Some(0.0),
            NumberPolicy::DropRow => None,
        },
    }
}

/// Rows of one legend entry, ordered for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub rows: Vec<NormalizedRow>,
    pub temporal: bool,
}

/// Splits rows into series by `group` and sorts each series by `x`
/// ascending: by timestamp when the whole row set is temporal, else
/// numerically when both sides read as numbers, else lexicographically.
/// Legend order (the order of the returned series) follows first
/// appearance across the full row set.
pub fn group_series(rows: &[NormalizedRow]) -> Vec<Series> {
    let temporal = detect_temporal(rows).is_some();
    let mut names: Vec<&str> = Vec::new();
    for row in rows {
        if !names.contains(&row.group.as_str()) {
            names.push(&row.group);
        }
    }

    names
        .iter()
        .map(|name| {
            let mut members: Vec<NormalizedRow> = rows
                .iter()
                .filter(|row| row.group == *name)
                .cloned()
                .collect();
            members.sort_by(|a, b| compare_x(a, b, temporal));
            Series {
                name: (*name).to_string(),
                rows: members,
                temporal,
            }
        })
        .collect()
}

/// Distinct `x` display values in first-appearance order over the
/// unsorted row sequence; this is the ordinal axis domain.
pub fn ordinal_domain(rows: &[NormalizedRow]) -> Vec<String> {
    let mut domain = Vec::new();
    for row in rows {
        let text = row.x_text();
        if !domain.contains(&text) {
            domain.push(text);
        }
    }
    domain
}

fn compare_x(a: &NormalizedRow, b: &NormalizedRow, temporal: bool) -> Ordering {
    if temporal
        && let (Some(first), Some(second)) = (parse_point(&a.x), parse_point(&b.x))
    {
        return first.cmp(&second);
    }
    match (a.x_number(), b.x_number()) {
        (Some(first), Some(second)) => first.partial_cmp(&second).unwrap_or(Ordering::Equal),
        _ => a.x_text().cmp(&b.x_text()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn xy_mapping() -> RoleMapping {
        RoleMapping::new().with_path("x", "cat").with_path("y", "val")
    }

    #[test]
    fn rows_with_missing_x_or_y_are_dropped() {
        let data = json!([
            {"cat": "a", "val": "3"},
            {"cat": "b", "val": null},
            {"val": 7},
        ]);
        for policy in [NumberPolicy::ZeroFill, NumberPolicy::DropRow] {
            let rows = transform(&data, &xy_mapping(), policy);
            assert_eq!(rows.len(), 1, "null y is a miss, not a zero, under {policy:?}");
            assert_eq!(rows[0].x, json!("a"));
            assert_eq!(rows[0].y, 3.0);
        }
    }

    #[test]
    fn number_policy_splits_on_non_numeric_y() {
        let data = json!([{"cat": "a", "val": "n/a"}]);
        let zeroed = transform(&data, &xy_mapping(), NumberPolicy::ZeroFill);
        assert_eq!(zeroed[0].y, 0.0);

        let dropped = transform(&data, &xy_mapping(), NumberPolicy::DropRow);
        assert!(dropped.is_empty());
    }

    #[test]
    fn object_input_uses_keys_as_x() {
        let data = json!({"alpha": 3, "beta": {"val": 5}, "gamma": "oops"});
        let rows = transform(&data, &xy_mapping(), NumberPolicy::ZeroFill);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].x, json!("alpha"));
        assert_eq!(rows[0].y, 3.0);
        assert_eq!(rows[1].x, json!("beta"), "object value falls back to key");
        assert_eq!(rows[1].y, 5.0);
        assert_eq!(rows[2].y, 0.0, "scalar that fails to parse zero-fills");
    }

    #[test]
    fn groups_keep_first_appearance_order_and_sort_by_x() {
        let data = json!([
            {"cat": "3", "val": 1, "series": "b"},
            {"cat": "1", "val": 2, "series": "a"},
            {"cat": "2", "val": 3, "series": "b"},
        ]);
        let mapping = xy_mapping().with_path("group", "series");
        let rows = transform(&data, &mapping, NumberPolicy::ZeroFill);
        let series = group_series(&rows);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "b", "legend order is first appearance");
        assert_eq!(series[1].name, "a");
        let xs: Vec<String> = series[0].rows.iter().map(NormalizedRow::x_text).collect();
        assert_eq!(xs, ["2", "3"], "numeric strings sort numerically");
    }

    #[test]
    fn ordinal_domain_preserves_first_seen_order() {
        let data = json!([
            {"cat": "west", "val": 1},
            {"cat": "east", "val": 2},
            {"cat": "west", "val": 3},
        ]);
        let rows = transform(&data, &xy_mapping(), NumberPolicy::ZeroFill);
        assert_eq!(ordinal_domain(&rows), ["west", "east"]);
    }
}
