use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, Result};

/// Normalized shape a chart type consumes.
///
/// The pipeline reads this off the definition to decide which transformer
/// runs before dispatch; `Raw` charts receive the row-path-resolved JSON
/// untouched and shape it themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataShape {
    Rows,
    Hierarchy,
    Network,
    #[default]
    Raw,
}

impl DataShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataShape::Rows => "rows",
            DataShape::Hierarchy => "hierarchy",
            DataShape::Network => "network",
            DataShape::Raw => "raw",
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a rows-shaped chart wants non-numeric `y` values handled.
///
/// Bar-style charts fill zeros so every category keeps a bar; line-style
/// charts drop the row so gaps stay gaps instead of plunging to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberPolicy {
    #[default]
    ZeroFill,
    DropRow,
}

/// One input slot a chart declares, required or optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDef {
    pub role: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

impl InputDef {
    pub fn required(role: &str, name: &str, description: &str) -> Self {
        InputDef {
            role: role.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            required: true,
        }
    }

    pub fn optional(role: &str, name: &str, description: &str) -> Self {
        InputDef {
            role: role.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            required: false,
        }
    }
}

/// Immutable description of one chart type: identity, the shape it
/// consumes, and the roles it accepts. Declared by the chart module
/// itself and registered alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub graph_type: String,
    pub description: String,
    #[serde(default)]
    pub shape: DataShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbers: Option<NumberPolicy>,
    pub required_inputs: Vec<InputDef>,
    pub optional_inputs: Vec<InputDef>,
}

impl GraphDefinition {
    /// All declared inputs, required first.
    pub fn inputs(&self) -> impl Iterator<Item = &InputDef> {
        self.required_inputs.iter().chain(self.optional_inputs.iter())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.inputs().any(|input| input.role == role)
    }

    /// Number policy for rows-shaped consumers; `ZeroFill` when unset.
    pub fn number_policy(&self) -> NumberPolicy {
        self.numbers.unwrap_or_default()
    }

    /// Checks catalog integrity: non-empty identity, no role declared twice.
    pub fn verify(&self) -> Result<()> {
        if self.graph_type.trim().is_empty() {
            return Err(DefinitionError::EmptyType);
        }
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName {
                graph_type: self.graph_type.clone(),
            });
        }
        let mut seen = BTreeSet::new();
        for input in self.inputs() {
            if !seen.insert(input.role.as_str()) {
                return Err(DefinitionError::DuplicateRole {
                    graph_type: self.graph_type.clone(),
                    role: input.role.clone(),
                });
            }
        }
        Ok(())
    }
}
