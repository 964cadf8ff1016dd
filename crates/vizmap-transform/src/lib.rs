//! Transformers that map raw JSON onto the shapes charts consume:
//! normalized rows, rooted trees, and node/link networks. All of them
//! are pure over (raw value, role mapping) and degrade on bad input
//! instead of failing.

pub mod hierarchy;
pub mod network;
pub mod rows;
pub mod temporal;

mod source;

pub use hierarchy::build_hierarchy;
pub use network::build_network;
pub use rows::{Series, group_series, ordinal_domain, transform};
pub use temporal::{detect_temporal, parse_point};
