//! Central registry of chart types.
//!
//! Maps a chart type string to its [`GraphDefinition`] and, when one is
//! installed, the module that renders it. Definitions and modules are
//! registered together at startup; re-registering a type replaces its
//! definition without discarding an already-built module.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use rapidfuzz::distance::jaro_winkler;
use tracing::{debug, error};
use vizmap_model::{ChartData, GraphDefinition, MappingValidation, RenderConfig, RoleMapping};

use crate::container::Container;
use crate::module::{ModuleFactory, ModuleSlot};

/// Minimum Jaro-Winkler similarity before a name is offered as a
/// "did you mean" candidate.
const SUGGEST_THRESHOLD: f64 = 0.85;

struct RegistryEntry {
    definition: GraphDefinition,
    module: Option<ModuleSlot>,
}

/// Registry of chart definitions and render modules, keyed by type.
///
/// An explicit value, constructed once at startup and passed by
/// reference; it is `Send + Sync`, so one registry can serve every
/// render site in the process.
#[derive(Default)]
pub struct ChartRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl ChartRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the full built-in chart catalog installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::charts::install(&mut registry);
        registry
    }

    /// Registers (or replaces) a definition. An already-installed module
    /// for the type survives the replacement.
    pub fn register(&mut self, definition: GraphDefinition) {
        debug!(graph_type = %definition.graph_type, "registered graph type");
        match self.entries.get_mut(&definition.graph_type) {
            Some(entry) => entry.definition = definition,
            None => {
                self.entries.insert(
                    definition.graph_type.clone(),
                    RegistryEntry {
                        definition,
                        module: None,
                    },
                );
            }
        }
    }

    /// Registers a definition together with its module factory. The
    /// factory runs at most once, on the first render of the type.
    pub fn register_module(&mut self, definition: GraphDefinition, factory: ModuleFactory) {
        debug!(graph_type = %definition.graph_type, "registered graph module");
        let slot = ModuleSlot::new(factory);
        match self.entries.get_mut(&definition.graph_type) {
            Some(entry) => {
                entry.definition = definition;
                entry.module = Some(slot);
            }
            None => {
                self.entries.insert(
                    definition.graph_type.clone(),
                    RegistryEntry {
                        definition,
                        module: Some(slot),
                    },
                );
            }
        }
    }

    pub fn definition(&self, graph_type: &str) -> Option<&GraphDefinition> {
        self.entries.get(graph_type).map(|entry| &entry.definition)
    }

    pub fn contains(&self, graph_type: &str) -> bool {
        self.entries.contains_key(graph_type)
    }

    /// All registered definitions, ordered by chart type.
    pub fn available_graphs(&self) -> impl Iterator<Item = &GraphDefinition> {
        self.entries.values().map(|entry| &entry.definition)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nearest registered chart type by name similarity, if any is close
    /// enough to be worth offering.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        closest(self.entries.keys().map(String::as_str), name)
    }

    /// Checks a mapping against a type's declared inputs.
    ///
    /// Unknown chart types and missing required roles are errors; mapped
    /// roles the type never reads are warnings and do not block
    /// rendering. Near-miss names get a "did you mean" suffix.
    pub fn validate_mappings(&self, graph_type: &str, mapping: &RoleMapping) -> MappingValidation {
        let mut validation = MappingValidation::ok();

        let Some(definition) = self.definition(graph_type) else {
            let mut message = format!("Unknown graph type: {graph_type}");
            if let Some(close) = self.suggest(graph_type) {
                let _ = write!(message, " (did you mean \"{close}\"?)");
            }
            validation.push_error(message);
            return validation;
        };

        for input in &definition.required_inputs {
            if input.required && !mapping.contains(&input.role) {
                validation.push_error(format!(
                    "Required input \"{}\" ({}) is missing",
                    input.name, input.role
                ));
            }
        }

        for role in mapping.roles() {
            if !definition.has_role(role) {
                let mut message = format!("Mapping \"{role}\" is not used by {graph_type} graph");
                let known = definition.inputs().map(|input| input.role.as_str());
                if let Some(close) = closest(known, role) {
                    let _ = write!(message, " (did you mean \"{close}\"?)");
                }
                validation.push_warning(message);
            }
        }

        validation
    }

    /// Renders a chart into `container`, instantiating the module on
    /// first use.
    ///
    /// Never returns an error and never panics: an unknown type, a type
    /// with no module, or a failing module clears the container and
    /// leaves a visible error panel in its place, with the cause logged.
    pub fn load_and_render(
        &self,
        graph_type: &str,
        container: &mut Container,
        data: &ChartData,
        mapping: &RoleMapping,
        config: &RenderConfig,
    ) {
        debug!(graph_type, data = %data.summary(), "loading graph");
        container.clear();

        let Some(entry) = self.entries.get(graph_type) else {
            error!(graph_type, "unknown graph type");
            container.fail(graph_type, format!("Unknown graph type: {graph_type}"));
            return;
        };
        let Some(slot) = &entry.module else {
            error!(graph_type, "no module installed for graph type");
            container.fail(
                graph_type,
                format!("Graph module {graph_type} does not have a render function"),
            );
            return;
        };

        match slot.get().render(container, data, mapping, config) {
            Ok(()) => debug!(graph_type, "rendered graph"),
            Err(render_error) => {
                error!(graph_type, error = %render_error, "chart render failed");
                container.fail(graph_type, render_error.to_string());
            }
        }
    }
}

fn closest<'a>(candidates: impl Iterator<Item = &'a str>, name: &str) -> Option<&'a str> {
    let needle = name.to_lowercase();
    candidates
        .map(|candidate| {
            let score =
                jaro_winkler::similarity(candidate.to_lowercase().chars(), needle.chars());
            (candidate, score)
        })
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    use serde_json::json;
    use vizmap_model::{DataShape, InputDef};

    use super::*;
    use crate::error::RenderError;
    use crate::module::ChartModule;

    fn stub_definition(graph_type: &str) -> GraphDefinition {
        GraphDefinition {
            name: "Stub".to_string(),
            graph_type: graph_type.to_string(),
            description: "test double".to_string(),
            shape: DataShape::Raw,
            numbers: None,
            required_inputs: vec![InputDef::required("x", "X", "x input")],
            optional_inputs: vec![InputDef::optional("color", "Color", "tint")],
        }
    }

    struct StubModule {
        definition: GraphDefinition,
        fail: bool,
    }

    impl ChartModule for StubModule {
        fn definition(&self) -> &GraphDefinition {
            &self.definition
        }

        fn render(
            &self,
            container: &mut Container,
            data: &ChartData,
            _mapping: &RoleMapping,
            _config: &RenderConfig,
        ) -> crate::error::Result<()> {
            if self.fail {
                return Err(RenderError::renderer("stub blew up"));
            }
            container.scene("Stub", vec![data.summary()]);
            Ok(())
        }
    }

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    fn counting_factory() -> Box<dyn ChartModule> {
        BUILDS.fetch_add(1, AtomicOrdering::SeqCst);
        Box::new(StubModule {
            definition: stub_definition("counted"),
            fail: false,
        })
    }

    fn failing_factory() -> Box<dyn ChartModule> {
        Box::new(StubModule {
            definition: stub_definition("fragile"),
            fail: true,
        })
    }

    #[test]
    fn register_is_an_upsert_that_keeps_the_module() {
        let mut registry = ChartRegistry::new();
        registry.register_module(stub_definition("counted"), counting_factory);

        let mut replacement = stub_definition("counted");
        replacement.description = "second registration".to_string();
        registry.register(replacement);

        assert_eq!(registry.len(), 1);
        let definition = registry.definition("counted").unwrap();
        assert_eq!(definition.description, "second registration");

        // Module survived: a render still succeeds.
        let mut container = Container::new();
        registry.load_and_render(
            "counted",
            &mut container,
            &ChartData::Raw(json!([])),
            &RoleMapping::new(),
            &RenderConfig::default(),
        );
        assert!(!container.has_error());
    }

    #[test]
    fn factory_runs_at_most_once() {
        let mut registry = ChartRegistry::new();
        registry.register_module(stub_definition("counted"), counting_factory);

        let before = BUILDS.load(AtomicOrdering::SeqCst);
        let mut container = Container::new();
        for _ in 0..3 {
            registry.load_and_render(
                "counted",
                &mut container,
                &ChartData::Raw(json!(null)),
                &RoleMapping::new(),
                &RenderConfig::default(),
            );
        }
        assert_eq!(BUILDS.load(AtomicOrdering::SeqCst) - before, 1);
    }

    #[test]
    fn unknown_type_is_an_error_with_exact_message() {
        let registry = ChartRegistry::new();
        let validation = registry.validate_mappings("zzz", &RoleMapping::new());

        assert!(!validation.valid);
        assert_eq!(validation.errors, vec!["Unknown graph type: zzz".to_string()]);
    }

    #[test]
    fn unknown_type_close_to_a_registered_one_gets_a_suggestion() {
        let mut registry = ChartRegistry::new();
        registry.register(stub_definition("bar-chart"));

        let validation = registry.validate_mappings("bar-chrat", &RoleMapping::new());
        assert!(!validation.valid);
        assert!(validation.errors[0].starts_with("Unknown graph type: bar-chrat"));
        assert!(validation.errors[0].contains("did you mean \"bar-chart\"?"));
    }

    #[test]
    fn missing_required_role_uses_exact_message() {
        let mut registry = ChartRegistry::new();
        registry.register(stub_definition("stub"));

        let validation = registry.validate_mappings("stub", &RoleMapping::new());
        assert!(!validation.valid);
        assert_eq!(
            validation.errors,
            vec!["Required input \"X\" (x) is missing".to_string()]
        );
    }

    #[test]
    fn unused_role_warns_but_does_not_block() {
        let mut registry = ChartRegistry::new();
        registry.register(stub_definition("stub"));

        let mapping = RoleMapping::new()
            .with_path("x", "field")
            .with_path("wobble", "other");
        let validation = registry.validate_mappings("stub", &mapping);

        assert!(validation.valid);
        assert_eq!(
            validation.warnings,
            vec!["Mapping \"wobble\" is not used by stub graph".to_string()]
        );
    }

    #[test]
    fn near_miss_role_gets_a_suggestion() {
        let mut registry = ChartRegistry::new();
        registry.register(stub_definition("stub"));

        let mapping = RoleMapping::new()
            .with_path("x", "field")
            .with_path("colour", "tint");
        let validation = registry.validate_mappings("stub", &mapping);

        assert!(validation.valid);
        assert!(validation.warnings[0].contains("did you mean \"color\"?"));
    }

    #[test]
    fn render_of_unknown_type_paints_a_panel_every_time() {
        let registry = ChartRegistry::new();
        let mut container = Container::new();
        for _ in 0..2 {
            registry.load_and_render(
                "ghost",
                &mut container,
                &ChartData::Raw(json!(null)),
                &RoleMapping::new(),
                &RenderConfig::default(),
            );

            assert!(container.has_error());
            assert!(container.text().contains("Unknown graph type: ghost"));
        }
    }

    #[test]
    fn definition_without_module_paints_a_panel() {
        let mut registry = ChartRegistry::new();
        registry.register(stub_definition("paper"));

        let mut container = Container::new();
        registry.load_and_render(
            "paper",
            &mut container,
            &ChartData::Raw(json!(null)),
            &RoleMapping::new(),
            &RenderConfig::default(),
        );

        assert!(container.has_error());
        assert!(
            container
                .text()
                .contains("Graph module paper does not have a render function")
        );
    }

    #[test]
    fn failing_module_replaces_output_with_a_panel() {
        let mut registry = ChartRegistry::new();
        registry.register_module(stub_definition("fragile"), failing_factory);

        let mut container = Container::new();
        container.scene("Stale", vec!["leftover".to_string()]);
        registry.load_and_render(
            "fragile",
            &mut container,
            &ChartData::Raw(json!(null)),
            &RoleMapping::new(),
            &RenderConfig::default(),
        );

        assert!(container.has_error());
        let text = container.text();
        assert!(text.contains("stub blew up"));
        assert!(!text.contains("leftover"));
    }

    #[test]
    fn available_graphs_are_sorted_by_type() {
        let mut registry = ChartRegistry::new();
        registry.register(stub_definition("zeta"));
        registry.register(stub_definition("alpha"));

        let types: Vec<&str> = registry
            .available_graphs()
            .map(|definition| definition.graph_type.as_str())
            .collect();
        assert_eq!(types, ["alpha", "zeta"]);
    }
}
