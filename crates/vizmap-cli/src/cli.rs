//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vizmap",
    version,
    about = "Map JSON feeds onto chart types and render them",
    long_about = "Map arbitrary JSON feeds onto chart types through role mappings.\n\n\
                  A workspace config pairs a data source with per-chart role\n\
                  mappings; vizmap validates the mappings, shapes the data, and\n\
                  renders each graph or reports why it could not."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render every configured graph, or one, from a workspace config.
    Render(RenderArgs),

    /// Check configured mappings against chart schemas without rendering.
    Validate(ValidateArgs),

    /// List every registered chart type.
    Graphs,

    /// Export the chart definition catalog as JSON.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to the workspace config file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Data file overriding the config's dataSource.apiResponse.
    #[arg(long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Render a single graph type instead of every configured one.
    #[arg(long = "graph", value_name = "TYPE")]
    pub graph: Option<String>,

    /// Render surface width in pixels.
    #[arg(long = "width", default_value_t = 800)]
    pub width: u32,

    /// Render surface height in pixels.
    #[arg(long = "height", default_value_t = 500)]
    pub height: u32,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the workspace config file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Write the catalog to a file instead of stdout.
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
