use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration has no dataSource.apiResponse and no data file was given")]
    MissingDataSource,

    #[error("graph {graph_type} is not configured ({hint})")]
    UnknownGraph { graph_type: String, hint: String },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown_graph<'a>(
        graph_type: impl Into<String>,
        configured: impl Iterator<Item = &'a str>,
    ) -> Self {
        let known: Vec<&str> = configured.collect();
        let hint = if known.is_empty() {
            "the configuration defines no graphs".to_string()
        } else {
            format!("configured graphs: {}", known.join(", "))
        };
        Self::UnknownGraph {
            graph_type: graph_type.into(),
            hint,
        }
    }
}
