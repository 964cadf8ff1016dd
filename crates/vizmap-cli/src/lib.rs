//! Library components for the vizmap CLI.

pub mod catalog;
pub mod logging;
