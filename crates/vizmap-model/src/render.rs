use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chart-agnostic render options. Anything beyond the common fields is
/// kept in `options` and passed through to the module untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

impl RenderConfig {
    pub fn sized(width: u32, height: u32) -> Self {
        RenderConfig {
            width,
            height,
            ..RenderConfig::default()
        }
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800,
            height: 500,
            title: None,
            options: BTreeMap::new(),
        }
    }
}
