//! The directed graph container.
//!
//! Uses petgraph to store vertices and edges and keeps an identity index
//! so that vertex and edge insertion are both idempotent.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

use super::types::{Entity, GraphSnapshot, GraphStats};

/// A directed graph over any [`Entity`], without parallel edges.
///
/// Every endpoint of an edge is also a vertex. Iteration yields vertices and
/// edges in insertion order, so building the same input twice produces the
/// same output.
#[derive(Debug, Clone)]
pub struct Graph<V: Entity> {
    /// The directed graph storing the relationships.
    graph: DiGraph<V, ()>,
    /// Index: vertex identity -> node index.
    index: HashMap<V, NodeIndex>,
}

impl<V: Entity> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    // ─── Mutation ───────────────────────────────────────────────

    /// Insert `vertex` if it is not already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.node(vertex);
    }

    /// Insert both endpoints, then the ordered pair if absent.
    ///
    /// Returns `true` if the edge was not present before.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        let from = self.node(from);
        let to = self.node(to);
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }
        self.graph.add_edge(from, to, ());
        true
    }

    fn node(&mut self, vertex: V) -> NodeIndex {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.index.insert(vertex, idx);
        idx
    }

    // ─── Queries ────────────────────────────────────────────────

    /// True iff the ordered pair `(from, to)` is an edge.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.graph.node_weights()
    }

    /// All edges as `(from, to)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()]))
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of edges ending at `vertex`; zero for unknown vertices.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.index
            .get(vertex)
            .map(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Every vertex paired with its in-degree, zeros included.
    pub fn in_degrees(&self) -> Vec<(&V, usize)> {
        self.graph
            .node_indices()
            .map(|idx| {
                let count = self
                    .graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .count();
                (&self.graph[idx], count)
            })
            .collect()
    }

    // ─── Stats ──────────────────────────────────────────────────

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            interfaces: self.vertices().filter(|v| v.is_interface()).count(),
        }
    }

    /// Copy out names only, for serialization.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.vertices().map(|v| v.name().to_string()).collect(),
            edges: self
                .edges()
                .map(|(from, to)| (from.name().to_string(), to.name().to_string()))
                .collect(),
        }
    }
}

impl<V: Entity> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
