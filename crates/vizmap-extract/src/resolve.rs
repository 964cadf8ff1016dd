use serde_json::Value;

use crate::path::{FieldPath, Segment};

/// Walks `path` through `root`.
///
/// Any miss degrades to `None`: an absent key, an index past the end of
/// an array, an index segment applied to a non-array, or traversal
/// through `null` or a scalar. A path that ends **on** a `null` value
/// returns `Some(&Value::Null)` so callers can tell "absent" from
/// "present but null"; use [`resolve_non_null`] to collapse the two.
pub fn resolve<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.segments() {
        current = step(current, segment)?;
    }
    Some(current)
}

/// [`resolve`] with trailing `null` collapsed into `None`.
pub fn resolve_non_null<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    resolve(root, path).filter(|value| !value.is_null())
}

/// [`resolve`], unwrapping a leading array element.
///
/// When the resolved value is a non-empty array whose first element is a
/// string or number, that first element is returned; richer arrays pass
/// through whole. Callers that need the array itself should use
/// [`resolve`].
pub fn resolve_scalar<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let value = resolve(root, path)?;
    if let Value::Array(items) = value
        && let Some(first) = items.first()
        && (first.is_string() || first.is_number())
    {
        return Some(first);
    }
    Some(value)
}

/// [`resolve`], retrying once with every namespace prefix stripped when
/// the literal spelling misses. Data sources that prefix keys
/// inconsistently (`wb:name` in one payload, `name` in the next) resolve
/// under either spelling.
pub fn resolve_lenient<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    resolve(root, path).or_else(|| {
        if path.has_namespaces() {
            resolve(root, &path.without_namespaces())
        } else {
            None
        }
    })
}

fn step<'a>(value: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match segment {
        Segment::Index(index) => value.as_array()?.get(*index),
        Segment::Key { literal, local } => {
            let object = value.as_object()?;
            if let Some(found) = object.get(literal) {
                return Some(found);
            }
            if let Some(local) = local
                && let Some(found) = object.get(local)
            {
                return Some(found);
            }
            // The reverse direction: the key is namespaced but the
            // segment is not (`{"wb:field": …}` looked up as `field`).
            object.iter().find_map(|(key, found)| {
                let (_, suffix) = key.rsplit_once(':')?;
                (suffix == literal).then_some(found)
            })
        }
    }
}
