use thiserror::Error;

/// Integrity problems in a graph definition, caught at registration time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("graph definition has an empty type")]
    EmptyType,
    #[error("graph definition \"{graph_type}\" has an empty name")]
    EmptyName { graph_type: String },
    #[error("graph definition \"{graph_type}\" declares role \"{role}\" more than once")]
    DuplicateRole { graph_type: String, role: String },
}

pub type Result<T> = std::result::Result<T, DefinitionError>;
