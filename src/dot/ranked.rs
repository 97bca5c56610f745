//! DOT layout that places vertices in rows by in-degree.
//!
//! A hidden chain of rank nodes (`rank_0 -> rank_1 -> rank_4`) orders the rows,
//! and each vertex is pinned to the rank node matching its in-degree.

use std::collections::BTreeMap;
use std::io::{self, Write};

use super::DotWriter;
use crate::graph::{Entity, Graph};

/// Group vertices by in-degree, ascending. Every vertex lands in exactly
/// one bucket; vertices without incoming edges are in bucket 0.
pub fn in_degree_buckets<V: Entity>(graph: &Graph<V>) -> BTreeMap<usize, Vec<&V>> {
    let mut buckets: BTreeMap<usize, Vec<&V>> = BTreeMap::new();
    for (vertex, count) in graph.in_degrees() {
        buckets.entry(count).or_default().push(vertex);
    }
    buckets
}

/// Synthetic rank node id. Unquoted `rank_N` never equals a quoted vertex
/// name made only of digits.
fn rank_id(count: usize) -> String {
    format!("rank_{}", count)
}

impl DotWriter {
    /// Write `graph` with rows ordered by in-degree and orthogonal edges.
    pub fn write_ranked_dot<V: Entity, W: Write + ?Sized>(
        &self,
        graph: &Graph<V>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "digraph {{")?;
        writeln!(out, "rankdir=BT;")?;
        writeln!(out, "splines=ortho;")?;
        writeln!(out)?;

        // Rank markers live in their own scope so their defaults never reach
        // real vertices. Every real vertex is first mentioned below the box
        // default.
        let buckets = in_degree_buckets(graph);
        if !buckets.is_empty() {
            writeln!(out, "{{")?;
            writeln!(out, "node[shape=none];")?;
            writeln!(out, "edge[arrowhead=none];")?;
            for count in buckets.keys() {
                writeln!(out, "{} [label=\"{}\"];", rank_id(*count), count)?;
            }
            let chain: Vec<String> = buckets.keys().map(|count| rank_id(*count)).collect();
            writeln!(out, "{};", chain.join(" -> "))?;
            writeln!(out, "}}")?;
            writeln!(out)?;
        }

        writeln!(out, "node[shape=box, color=black];")?;
        for (count, vertices) in &buckets {
            write!(out, "{{rank=same {};", rank_id(*count))?;
            for vertex in vertices {
                write!(out, " \"{}\";", vertex.name())?;
            }
            writeln!(out, "}}")?;
        }
        if !buckets.is_empty() {
            writeln!(out)?;
        }

        writeln!(out, "//{} nodes.", V::KIND)?;
        for vertex in graph.vertices() {
            self.write_vertex(out, vertex)?;
        }
        writeln!(out)?;

        self.write_edges(out, graph)?;
        writeln!(out, "}}")
    }
}
