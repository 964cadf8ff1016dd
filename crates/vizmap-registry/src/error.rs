//! Error types for chart rendering.

use vizmap_model::DataShape;

/// Errors a chart module can raise while drawing into a container.
///
/// These never escape [`crate::ChartRegistry::load_and_render`]; the
/// registry catches them and paints an error panel instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("chart needs {expected} data but received {actual}")]
    ShapeMismatch {
        expected: DataShape,
        actual: DataShape,
    },

    #[error("render failed: {message}")]
    Renderer { message: String },
}

impl RenderError {
    pub fn renderer(message: impl Into<String>) -> Self {
        Self::Renderer {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
