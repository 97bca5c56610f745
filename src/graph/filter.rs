//! Name-based exclusion.
//!
//! Filtering is edge-driven: the result contains exactly the edges whose
//! endpoints both survive, and the vertices those edges touch. A vertex with
//! no surviving edge is dropped even if its own name is fine.

use regex::Regex;
use tracing::debug;

use super::engine::Graph;
use super::types::Entity;
use crate::error::{Result, TypegraphError};

/// Copy `graph`, leaving out every edge with an endpoint whose name matches.
pub fn filter_out<V, P>(graph: &Graph<V>, matches: P) -> Graph<V>
where
    V: Entity,
    P: Fn(&str) -> bool,
{
    let mut filtered = Graph::new();
    for (from, to) in graph.edges() {
        if !matches(from.name()) && !matches(to.name()) {
            filtered.add_edge(from.clone(), to.clone());
        }
    }
    debug!(
        before = graph.vertex_count(),
        after = filtered.vertex_count(),
        "filtered graph"
    );
    filtered
}

/// [`filter_out`] with a regular expression as the predicate.
pub fn filter_out_matching<V: Entity>(graph: &Graph<V>, pattern: &Regex) -> Graph<V> {
    filter_out(graph, |name| pattern.is_match(name))
}

/// Apply several exclusion patterns in turn.
pub fn filter_out_all<V: Entity>(graph: Graph<V>, patterns: &[Regex]) -> Graph<V> {
    patterns
        .iter()
        .fold(graph, |graph, pattern| filter_out_matching(&graph, pattern))
}

/// Compile exclusion patterns.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p.as_ref()).map_err(|source| TypegraphError::Pattern {
                pattern: p.as_ref().to_string(),
                source,
            })
        })
        .collect()
}
