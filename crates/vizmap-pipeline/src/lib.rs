#![deny(unsafe_code)]

//! Orchestration: workspace configs in, rendered containers out.
//!
//! This crate owns the persisted config model (camelCase JSON with a
//! legacy single-graph dialect), data-source loading, and the staged
//! pipeline that takes a graph from mapping validation through shaping
//! to registry dispatch.

mod config;
mod error;
mod pipeline;
mod source;

pub use config::{DataSource, DataSourceRef, GraphConfig, Visualization, WorkspaceConfig};
pub use error::PipelineError;
pub use pipeline::{GraphOutcome, GraphReport, GraphRequest, render_all, render_graph, render_one};
pub use source::{load_config, load_data, resolve_data_source};
