#![deny(unsafe_code)]

//! Chart type registry.
//!
//! Holds the catalog of chart definitions, validates role mappings
//! against them, and dispatches renders to chart modules. Modules are
//! registered as factories and instantiated lazily on first render;
//! render failures never propagate, they surface as an error panel in
//! the target [`Container`].

mod charts;
mod container;
mod error;
mod module;
mod registry;

pub use container::{Block, Container};
pub use error::{RenderError, Result};
pub use module::{ChartModule, ModuleFactory};
pub use registry::ChartRegistry;
