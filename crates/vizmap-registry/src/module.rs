//! Chart module trait and lazy instantiation.

use std::sync::OnceLock;

use vizmap_model::{ChartData, GraphDefinition, RenderConfig, RoleMapping};

use crate::container::Container;
use crate::error::Result;

/// A renderer for one chart type.
///
/// Modules receive data already normalized to the shape their definition
/// declares; the mapping and config come along for labels and sizing.
/// Implementations must be shareable across threads; the registry hands
/// out `&dyn ChartModule` from behind a cache.
pub trait ChartModule: Send + Sync {
    /// The definition this module was registered with.
    fn definition(&self) -> &GraphDefinition;

    /// Draws into `container`. The registry clears the container before
    /// calling; on `Err` it discards whatever was drawn and paints an
    /// error panel instead.
    fn render(
        &self,
        container: &mut Container,
        data: &ChartData,
        mapping: &RoleMapping,
        config: &RenderConfig,
    ) -> Result<()>;
}

/// Constructor registered for a chart type; invoked at most once.
pub type ModuleFactory = fn() -> Box<dyn ChartModule>;

/// Holds a factory and the module it built, instantiated on first use.
pub(crate) struct ModuleSlot {
    factory: ModuleFactory,
    instance: OnceLock<Box<dyn ChartModule>>,
}

impl ModuleSlot {
    pub(crate) fn new(factory: ModuleFactory) -> Self {
        Self {
            factory,
            instance: OnceLock::new(),
        }
    }

    /// The cached module, building it first if no render has happened yet.
    /// Concurrent first calls race on `OnceLock`; exactly one factory run
    /// wins and everyone sees the same instance.
    pub(crate) fn get(&self) -> &dyn ChartModule {
        self.instance.get_or_init(self.factory).as_ref()
    }
}
