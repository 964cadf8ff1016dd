use proptest::prelude::*;
use serde_json::{Value, json};

use vizmap_extract::{FieldPath, resolve, resolve_lenient, resolve_scalar};

fn world_bank_sample() -> Value {
    json!({
        "page": 1,
        "data": [
            {
                "wb:name": "Italy",
                "wb:longitude": "12.4829",
                "wb:latitude": "41.8933",
                "region": {"wb:id": "EUU", "value": "European Union"}
            },
            {
                "wb:name": "Japan",
                "wb:longitude": "139.77",
                "wb:latitude": "35.67",
                "region": {"wb:id": "EAS", "value": "East Asia"}
            }
        ]
    })
}

#[test]
fn dotted_path_reaches_nested_values() {
    let root = world_bank_sample();
    assert_eq!(
        resolve(&root, &FieldPath::parse("data.1.region.value")),
        Some(&json!("East Asia"))
    );
    assert_eq!(
        resolve(&root, &FieldPath::parse("data[0].wb:name")),
        Some(&json!("Italy"))
    );
}

#[test]
fn namespace_fallback_applies_in_both_directions() {
    let root = world_bank_sample();
    // Segment without prefix, key with prefix.
    assert_eq!(
        resolve(&root, &FieldPath::parse("data.0.name")),
        Some(&json!("Italy"))
    );
    // Segment with prefix, key without.
    assert_eq!(
        resolve(&root, &FieldPath::parse("data.0.wb:region")),
        resolve(&root, &FieldPath::parse("data.0.region"))
    );
}

#[test]
fn misses_return_none_not_errors() {
    let root = world_bank_sample();
    for expr in [
        "data.5.wb:name",    // index out of bounds
        "page.0",            // numeric segment on a scalar
        "data.0.missing",    // absent key
        "data.0.wb:name.x",  // traversal through a string
    ] {
        assert_eq!(
            resolve(&root, &FieldPath::parse(expr)),
            None,
            "expected a miss for {expr}"
        );
    }
}

#[test]
fn lenient_retry_recovers_unprefixed_payloads() {
    // Same mapping paths, payload without the wb: prefixes.
    let unprefixed = json!({"data": [{"name": "Italy", "longitude": "12.48"}]});
    let path = FieldPath::parse("data.0.wb:longitude");
    assert_eq!(
        resolve_lenient(&unprefixed, &path),
        Some(&json!("12.48"))
    );
}

#[test]
fn scalar_unwrap_only_for_plain_first_elements() {
    let root = json!({"values": [3, 4, 5], "nested": [[1, 2]], "empty": []});
    assert_eq!(
        resolve_scalar(&root, &FieldPath::parse("values")),
        Some(&json!(3))
    );
    assert_eq!(
        resolve_scalar(&root, &FieldPath::parse("nested")),
        Some(&json!([[1, 2]]))
    );
    assert_eq!(
        resolve_scalar(&root, &FieldPath::parse("empty")),
        Some(&json!([]))
    );
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z:]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z:]{1,6}", inner, 0..6)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn resolve_never_panics(root in arb_json(), expr in "[\\[\\]a-z0-9:.$]{0,24}") {
        let path = FieldPath::parse(&expr);
        let _ = resolve(&root, &path);
        let _ = resolve_scalar(&root, &path);
        let _ = resolve_lenient(&root, &path);
    }

    #[test]
    fn dollar_prefix_is_a_noop(root in arb_json(), expr in "[a-z0-9:.]{0,16}") {
        let plain = FieldPath::parse(&expr);
        let prefixed = FieldPath::parse(&format!("$.{expr}"));
        prop_assert_eq!(resolve(&root, &plain), resolve(&root, &prefixed));
    }
}
