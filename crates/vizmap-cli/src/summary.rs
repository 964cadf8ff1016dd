use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vizmap_pipeline::{GraphOutcome, GraphReport};

use crate::commands::ValidationOutcome;

pub fn print_render_summary(reports: &[GraphReport]) {
    if reports.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Graph"),
        header_cell("Status"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for report in reports {
        let (status, errors, warnings) = match &report.outcome {
            GraphOutcome::Blocked(validation) => (
                status_cell("BLOCKED", Color::Red),
                validation.error_count(),
                validation.warning_count(),
            ),
            GraphOutcome::Rendered { warnings } if report.container.has_error() => {
                (status_cell("ERROR", Color::Red), 1, warnings.len())
            }
            GraphOutcome::Rendered { warnings } => {
                (status_cell("OK", Color::Green), 0, warnings.len())
            }
        };
        table.add_row(vec![
            graph_cell(&report.chart_type),
            status,
            count_cell(errors, Color::Red),
            count_cell(warnings, Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn print_validation_summary(outcomes: &[ValidationOutcome]) {
    if outcomes.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Graph"),
        header_cell("Status"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in outcomes {
        let status = if outcome.validation.valid {
            status_cell("OK", Color::Green)
        } else {
            status_cell("INVALID", Color::Red)
        };
        table.add_row(vec![
            graph_cell(&outcome.chart_type),
            status,
            count_cell(outcome.validation.error_count(), Color::Red),
            count_cell(outcome.validation.warning_count(), Color::Yellow),
        ]);
    }
    println!("{table}");
    print_findings(outcomes);
}

fn print_findings(outcomes: &[ValidationOutcome]) {
    let mut findings = Vec::new();
    for outcome in outcomes {
        for error in &outcome.validation.errors {
            findings.push((outcome.chart_type.as_str(), kind_cell(true), error));
        }
        for warning in &outcome.validation.warnings {
            findings.push((outcome.chart_type.as_str(), kind_cell(false), warning));
        }
    }
    if findings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Graph"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for (chart_type, kind, message) in findings {
        table.add_row(vec![Cell::new(chart_type), kind, Cell::new(message)]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn graph_cell(chart_type: &str) -> Cell {
    Cell::new(chart_type)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn status_cell(label: &str, color: Color) -> Cell {
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn kind_cell(is_error: bool) -> Cell {
    if is_error {
        Cell::new("ERROR").fg(Color::Red)
    } else {
        Cell::new("WARN").fg(Color::Yellow)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
