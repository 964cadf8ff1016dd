#![deny(unsafe_code)]

//! Field-path parsing and tolerant resolution over `serde_json` values.
//!
//! Paths address locations inside arbitrary JSON (`data.0.wb:longitude`,
//! `rows[2].name`). Resolution never fails: every miss degrades to
//! `None`, which downstream transformers treat as "drop this field/row",
//! never as an error.

pub mod path;
pub mod resolve;

pub use path::{FieldPath, Segment};
pub use resolve::{resolve, resolve_lenient, resolve_non_null, resolve_scalar};
