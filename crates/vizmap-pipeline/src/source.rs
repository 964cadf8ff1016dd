use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::{DataSourceRef, WorkspaceConfig};
use crate::error::PipelineError;

/// Reads a workspace config from disk and normalizes it into the
/// modern multi-graph dialect.
pub fn load_config(path: &Path) -> Result<WorkspaceConfig, PipelineError> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::io(path, source))?;
    let mut config: WorkspaceConfig =
        serde_json::from_str(&text).map_err(|source| PipelineError::json(path, source))?;
    config.normalize();
    debug!(
        path = %path.display(),
        graphs = config.visualization.graphs.len(),
        "loaded workspace config"
    );
    Ok(config)
}

/// Reads a raw JSON data file.
pub fn load_data(path: &Path) -> Result<Value, PipelineError> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| PipelineError::json(path, source))
}

/// Picks the raw data for a run. An explicitly supplied file wins;
/// otherwise the config's `dataSource.apiResponse` is used, either
/// inline or as a file name resolved against `base_dir` (normally the
/// config file's directory).
pub fn resolve_data_source(
    config: &WorkspaceConfig,
    explicit: Option<&Path>,
    base_dir: &Path,
) -> Result<Value, PipelineError> {
    if let Some(path) = explicit {
        return load_data(path);
    }
    match &config.data_source.api_response {
        Some(DataSourceRef::Inline(value)) => Ok(value.clone()),
        Some(DataSourceRef::File(name)) => load_data(&base_dir.join(name)),
        None => Err(PipelineError::MissingDataSource),
    }
}
