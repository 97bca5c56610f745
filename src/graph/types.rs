//! Core types for the entity graph.
//!
//! Defines the capability every vertex kind must have, the traversal
//! strategies for dependency walks, and the serializable graph views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Something that can be a vertex: it has a fully-qualified name and an
/// identity usable as a map/set key.
///
/// Identity comes from `Eq`/`Hash`, never from [`Entity::name`]. Two distinct
/// entities may share a display name and still be separate vertices.
pub trait Entity: Clone + Eq + Hash {
    /// Heading used for the node section of the DOT output ("Class", "Module").
    const KIND: &'static str;

    /// Whether DOT output splits vertices into interface and class sections.
    const PARTITIONED: bool = false;

    /// The fully-qualified name.
    fn name(&self) -> &str;

    /// Interfaces are listed in their own DOT section when `PARTITIONED`.
    fn is_interface(&self) -> bool {
        false
    }

    /// Member descriptions rendered by the UML style. Empty by default.
    fn members(&self) -> &[String] {
        &[]
    }
}

/// How far a dependency walk follows imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Follow imports recursively until the reachable set is exhausted.
    #[default]
    Transitive,
    /// Record one level of imports only.
    Direct,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Transitive => write!(f, "transitive"),
            Strategy::Direct => write!(f, "direct"),
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    /// Vertices for which [`Entity::is_interface`] holds.
    pub interfaces: usize,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices ({} interfaces), {} edges",
            self.vertices, self.interfaces, self.edges
        )
    }
}

/// A name-only copy of a graph, for JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<String>,
    pub edges: Vec<(String, String)>,
}
