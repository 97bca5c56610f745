//! Entity graph module — the structural backbone of typegraph.
//!
//! Provides the generic graph container, the builders that populate it from
//! a manifest, and the name filter.

pub mod dependencies;
pub mod engine;
pub mod filter;
pub mod hierarchy;
pub mod types;

pub use dependencies::add_module_with_dependencies;
pub use engine::Graph;
pub use filter::{compile_patterns, filter_out, filter_out_all, filter_out_matching};
pub use hierarchy::{add_class_with_ancestors, add_module_types};
pub use types::{Entity, GraphSnapshot, GraphStats, Strategy};
