//! The mapping resolution pipeline: validate, pick the row set, shape
//! the data, render.
//!
//! Stages run in a fixed order. An invalid mapping blocks before
//! anything touches the container; everything after validation
//! degrades instead of failing, so the only unrendered outcome is
//! `Blocked`.

use serde_json::Value;
use tracing::{debug, info_span};

use vizmap_extract::{FieldPath, resolve_lenient};
use vizmap_model::{ChartData, DataShape, MappingValidation, RenderConfig, RoleMapping};
use vizmap_registry::{ChartRegistry, Container};
use vizmap_transform::{build_hierarchy, build_network, transform};

use crate::config::WorkspaceConfig;
use crate::error::PipelineError;

/// One graph to render: the chart type, the role mappings, and where
/// in the raw data the rows live.
#[derive(Debug, Clone, Copy)]
pub struct GraphRequest<'a> {
    pub chart_type: &'a str,
    pub mapping: &'a RoleMapping,
    pub row_path: Option<&'a str>,
    pub render_config: &'a RenderConfig,
}

/// What happened to one graph.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphOutcome {
    /// Validation failed; the container was not touched.
    Blocked(MappingValidation),
    /// The chart was dispatched. Render failures still land here, as
    /// an error panel in the container.
    Rendered { warnings: Vec<String> },
}

impl GraphOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, GraphOutcome::Blocked(_))
    }
}

/// Outcome and output of one graph in a batch run.
#[derive(Debug)]
pub struct GraphReport {
    pub chart_type: String,
    pub outcome: GraphOutcome,
    pub container: Container,
}

impl GraphReport {
    /// True when the graph was dispatched and its module drew a scene
    /// rather than an error panel.
    pub fn succeeded(&self) -> bool {
        !self.outcome.is_blocked() && !self.container.has_error()
    }
}

/// Runs one graph through the pipeline.
///
/// Invalid mappings block with the container untouched; warnings alone
/// never block. After validation the row path is resolved leniently,
/// the data is shaped for the chart, and the registry renders it.
pub fn render_graph(
    registry: &ChartRegistry,
    raw: &Value,
    request: GraphRequest<'_>,
    container: &mut Container,
) -> GraphOutcome {
    let validation = registry.validate_mappings(request.chart_type, request.mapping);
    if !validation.valid {
        debug!(
            chart_type = request.chart_type,
            errors = validation.error_count(),
            "mapping validation blocked the render"
        );
        return GraphOutcome::Blocked(validation);
    }

    let working = select_rows(raw, request.row_path);
    let data = shape_data(registry, request.chart_type, working, request.mapping);
    registry.load_and_render(
        request.chart_type,
        container,
        &data,
        request.mapping,
        request.render_config,
    );
    GraphOutcome::Rendered {
        warnings: validation.warnings,
    }
}

/// Renders every graph in a workspace config, each into its own
/// container, in type order.
pub fn render_all(
    registry: &ChartRegistry,
    config: &WorkspaceConfig,
    raw: &Value,
    render_config: &RenderConfig,
) -> Vec<GraphReport> {
    let mut reports = Vec::with_capacity(config.visualization.graphs.len());
    for (chart_type, graph) in &config.visualization.graphs {
        let span = info_span!("render_graph", chart_type = %chart_type);
        let _guard = span.enter();

        let mut container = Container::new();
        let outcome = render_graph(
            registry,
            raw,
            GraphRequest {
                chart_type,
                mapping: &graph.mappings,
                row_path: config.row_path_for(graph),
                render_config,
            },
            &mut container,
        );
        reports.push(GraphReport {
            chart_type: chart_type.clone(),
            outcome,
            container,
        });
    }
    reports
}

/// Renders a single configured graph by type.
pub fn render_one(
    registry: &ChartRegistry,
    config: &WorkspaceConfig,
    raw: &Value,
    chart_type: &str,
    render_config: &RenderConfig,
) -> Result<GraphReport, PipelineError> {
    let Some(graph) = config.visualization.graphs.get(chart_type) else {
        return Err(PipelineError::unknown_graph(
            chart_type,
            config.visualization.graphs.keys().map(String::as_str),
        ));
    };

    let span = info_span!("render_graph", chart_type = %chart_type);
    let _guard = span.enter();

    let mut container = Container::new();
    let outcome = render_graph(
        registry,
        raw,
        GraphRequest {
            chart_type,
            mapping: &graph.mappings,
            row_path: config.row_path_for(graph),
            render_config,
        },
        &mut container,
    );
    Ok(GraphReport {
        chart_type: chart_type.to_string(),
        outcome,
        container,
    })
}

/// Resolves the configured row path against the raw data. Anything but
/// an array leaves the raw data in place.
fn select_rows<'a>(raw: &'a Value, row_path: Option<&str>) -> &'a Value {
    let Some(expr) = row_path else {
        return raw;
    };
    match resolve_lenient(raw, &FieldPath::parse(expr)) {
        Some(value) if value.is_array() => value,
        Some(_) => {
            debug!(row_path = expr, "row path is not an array, using raw data");
            raw
        }
        None => {
            debug!(row_path = expr, "row path resolved to nothing, using raw data");
            raw
        }
    }
}

/// Shapes the working data for the chart's declared input form.
fn shape_data(
    registry: &ChartRegistry,
    chart_type: &str,
    working: &Value,
    mapping: &RoleMapping,
) -> ChartData {
    let Some(definition) = registry.definition(chart_type) else {
        return ChartData::Raw(working.clone());
    };
    match definition.shape {
        DataShape::Rows => ChartData::Rows(transform(working, mapping, definition.number_policy())),
        DataShape::Hierarchy => ChartData::Tree(build_hierarchy(working, mapping)),
        DataShape::Network => ChartData::Network(build_network(working, mapping)),
        DataShape::Raw => ChartData::Raw(working.clone()),
    }
}
