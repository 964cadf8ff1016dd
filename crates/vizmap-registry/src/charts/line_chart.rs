//! Line chart: temporal or ordered numeric data, one line per series.

use vizmap_model::{
    ChartData, DataShape, GraphDefinition, InputDef, NumberPolicy, RenderConfig, RoleMapping,
};
use vizmap_transform::group_series;

use crate::container::Container;
use crate::error::{RenderError, Result};
use crate::module::ChartModule;

use super::scene_title;

pub(super) fn definition() -> GraphDefinition {
    GraphDefinition {
        name: "Line Chart".to_string(),
        graph_type: "line-chart".to_string(),
        description:
            "Line chart for temporal or ordered numeric data (supports multi-series via group role)"
                .to_string(),
        shape: DataShape::Rows,
        numbers: Some(NumberPolicy::DropRow),
        required_inputs: vec![
            InputDef::required("x", "X Value", "X-axis value (typically time or category)"),
            InputDef::required("y", "Y Value", "Y-axis numeric value"),
        ],
        optional_inputs: vec![
            InputDef::optional("group", "Series Group", "Field indicating series/group for multi-line"),
            InputDef::optional("color", "Color", "Color field or constant color value"),
            InputDef::optional("label", "Label", "Label for points or series"),
            InputDef::optional("tooltip", "Tooltip", "Tooltip content field"),
            InputDef::optional("strokeWidth", "Stroke Width", "Line stroke width (numeric)"),
        ],
    }
}

pub(super) fn module() -> Box<dyn ChartModule> {
    Box::new(LineChart {
        definition: definition(),
    })
}

struct LineChart {
    definition: GraphDefinition,
}

impl ChartModule for LineChart {
    fn definition(&self) -> &GraphDefinition {
        &self.definition
    }

    fn render(
        &self,
        container: &mut Container,
        data: &ChartData,
        _mapping: &RoleMapping,
        config: &RenderConfig,
    ) -> Result<()> {
        let Some(rows) = data.as_rows() else {
            return Err(RenderError::ShapeMismatch {
                expected: DataShape::Rows,
                actual: data.shape(),
            });
        };

        let series = group_series(rows);
        let temporal = series.first().is_some_and(|entry| entry.temporal);

        let mut lines = Vec::with_capacity(series.len() + 1);
        lines.push(format!(
            "x axis: {}",
            if temporal { "time" } else { "ordinal" }
        ));
        if series.is_empty() {
            lines.push("(no rows)".to_string());
        }
        for entry in &series {
            let first = entry.rows.first().map(|row| row.x_text()).unwrap_or_default();
            let last = entry.rows.last().map(|row| row.x_text()).unwrap_or_default();
            let low = entry.rows.iter().map(|row| row.y).fold(f64::INFINITY, f64::min);
            let high = entry
                .rows
                .iter()
                .map(|row| row.y)
                .fold(f64::NEG_INFINITY, f64::max);
            lines.push(format!(
                "{}: {} points, x {first} to {last}, y {low} to {high}",
                entry.name,
                entry.rows.len(),
            ));
        }

        container.scene(scene_title(config, &self.definition), lines);
        Ok(())
    }
}
