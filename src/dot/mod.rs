//! Graphviz DOT output.
//!
//! Two layouts are available: [`DotWriter::write_dot`] lists interfaces and
//! classes in separate node sections, and [`DotWriter::write_ranked_dot`]
//! stacks vertices in rows by in-degree. Both only append to the sink.
//!
//! Vertex names are quoted verbatim. Names containing `"` produce invalid
//! DOT; no escaping is applied to them.

mod plain;
mod ranked;

pub use ranked::in_degree_buckets;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::graph::{Entity, Graph};

/// How a vertex is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotStyle {
    /// A box with the fully-qualified name.
    #[default]
    Names,
    /// A UML-like record listing members. Vertices without members are drawn
    /// exactly as in `Names`.
    Uml,
}

impl fmt::Display for DotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotStyle::Names => write!(f, "names"),
            DotStyle::Uml => write!(f, "uml"),
        }
    }
}

/// Renders graphs as DOT text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotWriter {
    pub style: DotStyle,
}

impl DotWriter {
    pub fn new(style: DotStyle) -> Self {
        Self { style }
    }

    /// Render [`DotWriter::write_dot`] into a string.
    pub fn to_dot_string<V: Entity>(&self, graph: &Graph<V>) -> String {
        let mut out = Vec::new();
        self.write_dot(graph, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Render [`DotWriter::write_ranked_dot`] into a string.
    pub fn to_ranked_dot_string<V: Entity>(&self, graph: &Graph<V>) -> String {
        let mut out = Vec::new();
        self.write_ranked_dot(graph, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out).into_owned()
    }

    fn write_vertex<V: Entity, W: Write + ?Sized>(
        &self,
        out: &mut W,
        vertex: &V,
    ) -> io::Result<()> {
        let members = vertex.members();
        if self.style == DotStyle::Uml && !members.is_empty() {
            let mut label = escape_record(vertex.name());
            label.push('|');
            for member in members {
                label.push_str(&escape_record(member));
                label.push_str("\\l");
            }
            writeln!(
                out,
                "\"{}\" [shape=record, label=\"{{{}}}\"];",
                vertex.name(),
                label
            )
        } else {
            writeln!(out, "\"{}\";", vertex.name())
        }
    }

    fn write_edges<V: Entity, W: Write + ?Sized>(
        &self,
        out: &mut W,
        graph: &Graph<V>,
    ) -> io::Result<()> {
        for (from, to) in graph.edges() {
            writeln!(out, "\"{}\" -> \"{}\";", from.name(), to.name())?;
        }
        Ok(())
    }
}

/// Render `graph` with the default style.
pub fn write_dot<V: Entity, W: Write + ?Sized>(graph: &Graph<V>, out: &mut W) -> io::Result<()> {
    DotWriter::default().write_dot(graph, out)
}

/// Render `graph` ranked by in-degree with the default style.
pub fn write_ranked_dot<V: Entity, W: Write + ?Sized>(
    graph: &Graph<V>,
    out: &mut W,
) -> io::Result<()> {
    DotWriter::default().write_ranked_dot(graph, out)
}

/// Escape characters with meaning inside record labels.
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
