//! Built-in chart catalog.
//!
//! One file per chart type. Each declares the type's [`GraphDefinition`]
//! and a module constructor; [`install`] registers them all.
//! `bar-chart`, `line-chart`, `tree` and `force-directed` draw textual
//! scenes; the remaining types install preview modules that describe
//! their input until a full renderer lands.

mod arc_diagram;
mod area_chart;
mod bar_chart;
mod bubble_chart;
mod calendar_heatmap;
mod chord_diagram;
mod circle_packing;
mod dendrogram;
mod donut_chart;
mod force_directed;
mod heatmap;
mod histogram;
mod icicle;
mod line_chart;
mod radar_chart;
mod sankey_diagram;
mod scatterplot;
mod stacked_area_chart;
mod sunburst;
mod timeline;
mod tree;
mod treemap;
mod word_cloud;
mod world_map;

use vizmap_model::{ChartData, GraphDefinition, RenderConfig, RoleMapping};

use crate::container::Container;
use crate::error::Result;
use crate::module::ChartModule;
use crate::registry::ChartRegistry;

/// Registers every built-in chart type with its module.
pub(crate) fn install(registry: &mut ChartRegistry) {
    registry.register_module(arc_diagram::definition(), arc_diagram::module);
    registry.register_module(area_chart::definition(), area_chart::module);
    registry.register_module(bar_chart::definition(), bar_chart::module);
    registry.register_module(bubble_chart::definition(), bubble_chart::module);
    registry.register_module(calendar_heatmap::definition(), calendar_heatmap::module);
    registry.register_module(chord_diagram::definition(), chord_diagram::module);
    registry.register_module(circle_packing::definition(), circle_packing::module);
    registry.register_module(dendrogram::definition(), dendrogram::module);
    registry.register_module(donut_chart::definition(), donut_chart::module);
    registry.register_module(force_directed::definition(), force_directed::module);
    registry.register_module(heatmap::definition(), heatmap::module);
    registry.register_module(histogram::definition(), histogram::module);
    registry.register_module(icicle::definition(), icicle::module);
    registry.register_module(line_chart::definition(), line_chart::module);
    registry.register_module(radar_chart::definition(), radar_chart::module);
    registry.register_module(sankey_diagram::definition(), sankey_diagram::module);
    registry.register_module(scatterplot::definition(), scatterplot::module);
    registry.register_module(stacked_area_chart::definition(), stacked_area_chart::module);
    registry.register_module(sunburst::definition(), sunburst::module);
    registry.register_module(timeline::definition(), timeline::module);
    registry.register_module(tree::definition(), tree::module);
    registry.register_module(treemap::definition(), treemap::module);
    registry.register_module(word_cloud::definition(), word_cloud::module);
    registry.register_module(world_map::definition(), world_map::module);
}

/// Scene title: the configured title, else the chart's display name.
fn scene_title(config: &RenderConfig, definition: &GraphDefinition) -> String {
    config
        .title
        .clone()
        .unwrap_or_else(|| definition.name.clone())
}

/// Module for chart types whose real renderer lives with the embedding
/// surface: clears to a single line describing what would be drawn.
struct Preview {
    definition: GraphDefinition,
}

impl ChartModule for Preview {
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
        container.scene(
            scene_title(config, &self.definition),
            vec![format!(
                "{} placeholder ({})",
                self.definition.name,
                data.summary()
            )],
        );
        Ok(())
    }
}

fn preview(definition: GraphDefinition) -> Box<dyn ChartModule> {
    Box::new(Preview { definition })
}
