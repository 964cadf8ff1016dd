//! Pre-parsed role lookups shared by the transformers.

use serde_json::Value;

use vizmap_extract::{FieldPath, resolve, resolve_scalar};
use vizmap_model::{MappingValue, RoleMapping};

/// One mapped role, ready to evaluate against elements: either a parsed
/// field path or a constant applied to every element.
#[derive(Debug, Clone)]
pub(crate) enum Source {
    Path(FieldPath),
    Constant(Value),
}

impl Source {
    pub(crate) fn from_role(mapping: &RoleMapping, role: &str) -> Option<Source> {
        match mapping.get(role)? {
            MappingValue::Path(expr) => Some(Source::Path(FieldPath::parse(expr))),
            MappingValue::Constant(value) => Some(Source::Constant(value.clone())),
        }
    }

    /// Resolves without the scalar unwrap, for roles like `children`
    /// that must see whole arrays. Trailing nulls read as misses.
    pub(crate) fn lookup<'a>(&'a self, element: &'a Value) -> Option<&'a Value> {
        let value = match self {
            Source::Path(path) => resolve(element, path)?,
            Source::Constant(value) => value,
        };
        (!value.is_null()).then_some(value)
    }

    /// Resolves with the scalar unwrap, for point-like roles.
    pub(crate) fn lookup_scalar<'a>(&'a self, element: &'a Value) -> Option<&'a Value> {
        let value = match self {
            Source::Path(path) => resolve_scalar(element, path)?,
            Source::Constant(value) => value,
        };
        (!value.is_null()).then_some(value)
    }

    pub(crate) fn text(&self, element: &Value) -> Option<String> {
        self.lookup_scalar(element).map(text_value)
    }

    pub(crate) fn number(&self, element: &Value) -> Option<f64> {
        self.lookup_scalar(element).and_then(coerce_number)
    }
}

/// Display form of a resolved value: strings as-is, everything else via
/// its JSON rendering.
pub(crate) fn text_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Numeric reading of a resolved value: JSON numbers, numeric strings,
/// and booleans (1/0); everything else is not a number.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse().ok()
            }
        }
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}
