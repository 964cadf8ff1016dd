use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use vizmap_cli::catalog::{catalog_json, role_summary};
use vizmap_model::{MappingValidation, RenderConfig};
use vizmap_pipeline::{
    GraphOutcome, GraphReport, load_config, render_all, render_one, resolve_data_source,
};
use vizmap_registry::ChartRegistry;

use crate::cli::{CatalogArgs, RenderArgs, ValidateArgs};
use crate::summary::apply_table_style;

/// Validation result for one configured graph.
pub struct ValidationOutcome {
    pub chart_type: String,
    pub validation: MappingValidation,
}

pub fn run_render(args: &RenderArgs) -> Result<Vec<GraphReport>> {
    let registry = ChartRegistry::with_builtins();
    let config = load_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let base_dir = args
        .config
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let raw = resolve_data_source(&config, args.data.as_deref(), &base_dir)
        .context("load data source")?;
    let render_config = RenderConfig::sized(args.width, args.height);

    let reports = match &args.graph {
        Some(graph_type) => vec![render_one(
            &registry,
            &config,
            &raw,
            graph_type,
            &render_config,
        )?],
        None => render_all(&registry, &config, &raw, &render_config),
    };

    if reports.is_empty() {
        println!("No graph mappings configured.");
    }
    for report in &reports {
        print_report(report);
    }
    Ok(reports)
}

fn print_report(report: &GraphReport) {
    match &report.outcome {
        GraphOutcome::Blocked(validation) => {
            println!("[{}] blocked by mapping validation", report.chart_type);
            for error in &validation.errors {
                println!("  error: {error}");
            }
            for warning in &validation.warnings {
                println!("  warning: {warning}");
            }
        }
        GraphOutcome::Rendered { warnings } => {
            print!("{}", report.container.text());
            for warning in warnings {
                println!("  warning: {warning}");
            }
        }
    }
    println!();
}

pub fn run_validate(args: &ValidateArgs) -> Result<Vec<ValidationOutcome>> {
    let registry = ChartRegistry::with_builtins();
    let config = load_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;

    let mut outcomes = Vec::with_capacity(config.visualization.graphs.len());
    for (chart_type, graph) in &config.visualization.graphs {
        let validation = registry.validate_mappings(chart_type, &graph.mappings);
        outcomes.push(ValidationOutcome {
            chart_type: chart_type.clone(),
            validation,
        });
    }
    if outcomes.is_empty() {
        println!("No graph mappings configured.");
    }
    Ok(outcomes)
}

pub fn run_graphs() -> Result<()> {
    let registry = ChartRegistry::with_builtins();
    let mut table = Table::new();
    table.set_header(vec!["Type", "Name", "Shape", "Required", "Optional"]);
    apply_table_style(&mut table);
    for definition in registry.available_graphs() {
        let (required, optional) = role_summary(definition);
        table.add_row(vec![
            definition.graph_type.clone(),
            definition.name.clone(),
            definition.shape.to_string(),
            required,
            optional,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let registry = ChartRegistry::with_builtins();
    let text = catalog_json(&registry).context("serialize catalog")?;
    match &args.out {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("write catalog {}", path.display()))?;
            info!(path = %path.display(), "wrote catalog");
        }
        None => print!("{text}"),
    }
    Ok(())
}
