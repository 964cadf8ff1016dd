//! Bar chart: categorical x against numeric y.

use vizmap_model::{
    ChartData, DataShape, GraphDefinition, InputDef, NumberPolicy, RenderConfig, RoleMapping,
};

use crate::container::Container;
use crate::error::{RenderError, Result};
use crate::module::ChartModule;

use super::scene_title;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Bar Chart".to_string(),
        graph_type: "bar-chart".to_string(),
        description: "Bar chart visualization showing categorical data with numeric values"
            .to_string(),
        shape: DataShape::Rows,
        numbers: Some(NumberPolicy::ZeroFill),
        required_inputs: vec![
            InputDef::required("x", "X-Axis (Category)", "Categories for the X-axis"),
            InputDef::required("y", "Y-Axis (Value)", "Numeric values for the Y-axis"),
        ],
        optional_inputs: vec![
            InputDef::optional("label", "Label", "Text labels for bars"),
            InputDef::optional("color", "Color", "Color value or category for bar styling"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    Box::new(BarChart {
        definition: definition(),
    })
}

struct BarChart {
    definition: GraphDefinition,
}

impl ChartModule for BarChart {
    fn definition(&self) -> &GraphDefinition {
        &self.definition
    }

    fn render(
        &self,
        container: &mut Container,
        data: &ChartData,
        mapping: &RoleMapping,
        config: &RenderConfig,
    ) -> Result<()> {
        let Some(rows) = data.as_rows() else {
            return Err(RenderError::ShapeMismatch {
                expected: DataShape::Rows,
                actual: data.shape(),
            });
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(format!(
            "x: {}  y: {}",
            mapping.path("x").unwrap_or("-"),
            mapping.path("y").unwrap_or("-"),
        ));
        if rows.is_empty() {
            lines.push("(no rows)".to_string());
        }

        // Bars scale to the tallest positive value; width tracks the
        // configured pixel width so narrow configs stay readable.
        let peak = rows.iter().map(|row| row.y).fold(0.0_f64, f64::max);
        let span = (config.width / 20).clamp(10, 48) as usize;
        for row in rows {
            let filled = if peak > 0.0 {
                ((row.y / peak) * span as f64).round() as usize
            } else {
                0
            };
            let label = row.label.clone().unwrap_or_else(|| row.x_text());
            let bar = "#".repeat(filled);
            lines.push(format!("{label:>16} | {bar} {}", row.y));
        }

        container.scene(scene_title(config, &self.definition), lines);
        Ok(())
    }
}
