use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single mapped role value: a field path into the raw data, or a
/// constant applied as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingValue {
    Path(String),
    Constant(Value),
}

impl MappingValue {
    pub fn as_path(&self) -> Option<&str> {
        match self {
            MappingValue::Path(path) => Some(path),
            MappingValue::Constant(_) => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Value> {
        match self {
            MappingValue::Path(_) => None,
            MappingValue::Constant(value) => Some(value),
        }
    }
}

/// Role → value assignments for one graph, keyed by role name.
///
/// Built from the JSON object a workspace config persists: string values
/// are field paths, other non-null values are constants, and roles mapped
/// to JSON `null` are dropped so a null mapping and an absent mapping
/// behave identically downstream (required-role checks treat both as
/// missing, and neither draws an unknown-role warning).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleMapping {
    entries: BTreeMap<String, MappingValue>,
}

impl RoleMapping {
    pub fn new() -> Self {
        RoleMapping::default()
    }

    /// Builds a mapping from a persisted JSON object. Strings become
    /// paths, nulls are skipped, everything else is a constant.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let mut mapping = RoleMapping::new();
        for (role, value) in object {
            match value {
                Value::Null => {}
                Value::String(path) => mapping.set_path(role, path),
                other => mapping.set_constant(role, other.clone()),
            }
        }
        mapping
    }

    pub fn set_path(&mut self, role: &str, path: &str) {
        self.entries
            .insert(role.to_string(), MappingValue::Path(path.to_string()));
    }

    pub fn set_constant(&mut self, role: &str, value: Value) {
        self.entries
            .insert(role.to_string(), MappingValue::Constant(value));
    }

    pub fn with_path(mut self, role: &str, path: &str) -> Self {
        self.set_path(role, path);
        self
    }

    pub fn with_constant(mut self, role: &str, value: Value) -> Self {
        self.set_constant(role, value);
        self
    }

    pub fn remove(&mut self, role: &str) -> Option<MappingValue> {
        self.entries.remove(role)
    }

    pub fn get(&self, role: &str) -> Option<&MappingValue> {
        self.entries.get(role)
    }

    /// The mapped path for a role, if the role is mapped to a path.
    pub fn path(&self, role: &str) -> Option<&str> {
        self.get(role).and_then(MappingValue::as_path)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.entries.contains_key(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingValue)> {
        self.entries.iter().map(|(role, value)| (role.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// The persisted dialect stores paths as bare strings, so a string
// constant cannot be told apart from a path; `from_object` therefore
// always reads strings as paths, and serialization flattens both arms
// back onto the same representation.
impl Serialize for RoleMapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (role, value) in &self.entries {
            match value {
                MappingValue::Path(path) => map.serialize_entry(role, path)?,
                MappingValue::Constant(constant) => map.serialize_entry(role, constant)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RoleMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let object = Map::deserialize(deserializer)?;
        Ok(RoleMapping::from_object(&object))
    }
}
