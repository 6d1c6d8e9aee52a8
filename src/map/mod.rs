//! The map: regions and their adjacency.
//!
//! The region table is configuration data supplied at construction time,
//! either the built-in Brazilian map or an external JSON table.

mod brazil;
pub mod graph;

pub use graph::{Region, RegionGraph};
