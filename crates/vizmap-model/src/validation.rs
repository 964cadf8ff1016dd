use serde::{Deserialize, Serialize};

/// Outcome of validating a role mapping against a graph definition.
///
/// Errors make the mapping invalid and block the canonical pipeline;
/// warnings (unknown roles) are advisory and never block rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl MappingValidation {
    pub fn ok() -> Self {
        MappingValidation::default()
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

impl Default for MappingValidation {
    fn default() -> Self {
        MappingValidation {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
