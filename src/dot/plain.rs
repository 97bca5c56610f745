//! Sectioned DOT layout: interfaces first, then everything else, then edges.

use std::io::{self, Write};

use super::DotWriter;
use crate::graph::{Entity, Graph};

impl DotWriter {
    /// Write `graph` as a bottom-to-top digraph.
    ///
    /// For partitioned vertex kinds (types), interfaces are emitted in a
    /// blue section of their own. Other kinds get a single black section.
    pub fn write_dot<V: Entity, W: Write + ?Sized>(
        &self,
        graph: &Graph<V>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "digraph {{")?;
        writeln!(out, "rankdir=BT;")?;
        writeln!(out)?;

        if V::PARTITIONED {
            writeln!(out, "node[rank=source, shape=box, color=blue, penwidth=2];")?;
            writeln!(out, "//Interface nodes.")?;
            for vertex in graph.vertices().filter(|v| v.is_interface()) {
                self.write_vertex(out, vertex)?;
            }
            writeln!(out)?;

            writeln!(out, "node[color=black];")?;
            writeln!(out, "//{} nodes.", V::KIND)?;
            for vertex in graph.vertices().filter(|v| !v.is_interface()) {
                self.write_vertex(out, vertex)?;
            }
        } else {
            writeln!(out, "node[shape=box, color=black];")?;
            writeln!(out, "//{} nodes.", V::KIND)?;
            for vertex in graph.vertices() {
                self.write_vertex(out, vertex)?;
            }
        }
        writeln!(out)?;

        self.write_edges(out, graph)?;
        writeln!(out, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dot::DotStyle;
    use crate::graph::engine::tests::Named;
    use crate::graph::{add_class_with_ancestors, filter_out};
    use crate::manifest::{Manifest, ManifestBuilder};

    fn widgets() -> Manifest {
        let mut b = ManifestBuilder::new();
        let object = b.add_module("object");
        let root = b.add_type(object, "object.Object");
        b.set_root(root);

        let app = b.add_module("app");
        let editable = b.add_type(app, "Editable");
        let tweakable = b.add_type(app, "Tweakable");
        b.add_interface(tweakable, editable);
        let widget = b.add_class(app, "Widget", root);
        b.add_interface(widget, tweakable).add_member(widget, "resize()");
        b.add_class(app, "NotSoSpecialWidget", widget);
        b.build()
    }

    #[test]
    fn test_widget_hierarchy_golden() {
        let manifest = widgets();
        let mut graph = Graph::new();
        let leaf = manifest.find_type("NotSoSpecialWidget").unwrap();
        add_class_with_ancestors(&mut graph, leaf);
        let graph = filter_out(&graph, |name| name == "object.Object");

        let expected = "\
digraph {
rankdir=BT;

node[rank=source, shape=box, color=blue, penwidth=2];
//Interface nodes.
\"Tweakable\";
\"Editable\";

node[color=black];
//Class nodes.
\"NotSoSpecialWidget\";
\"Widget\";

\"NotSoSpecialWidget\" -> \"Widget\";
\"Widget\" -> \"Tweakable\";
\"Tweakable\" -> \"Editable\";
}
";
        assert_eq!(DotWriter::default().to_dot_string(&graph), expected);
    }

    #[test]
    fn test_uml_style_renders_members() {
        let manifest = widgets();
        let mut graph = Graph::new();
        add_class_with_ancestors(&mut graph, manifest.find_type("Widget").unwrap());

        let dot = DotWriter::new(DotStyle::Uml).to_dot_string(&graph);
        assert!(dot.contains("\"Widget\" [shape=record, label=\"{Widget|resize()\\l}\"];"));
        assert!(dot.contains("\"Tweakable\";\n"));

        let names = DotWriter::new(DotStyle::Names).to_dot_string(&graph);
        assert!(names.contains("\"Widget\";\n"));
        assert!(!names.contains("record"));
    }

    #[test]
    fn test_uml_without_members_matches_names() {
        let mut graph = Graph::new();
        graph.add_edge(Named("a"), Named("b"));
        assert_eq!(
            DotWriter::new(DotStyle::Uml).to_dot_string(&graph),
            DotWriter::new(DotStyle::Names).to_dot_string(&graph)
        );
    }

    #[test]
    fn test_module_graph_single_section() {
        let mut graph = Graph::new();
        graph.add_edge(Named("app"), Named("core"));

        let expected = "\
digraph {
rankdir=BT;

node[shape=box, color=black];
//Module nodes.
\"app\";
\"core\";

\"app\" -> \"core\";
}
";
        assert_eq!(DotWriter::default().to_dot_string(&graph), expected);
        assert!(!expected.contains("color=blue"));
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph: Graph<Named> = Graph::new();
        let dot = DotWriter::default().to_dot_string(&graph);
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(!dot.contains("->"));
    }

    struct FailingSink {
        budget: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.budget -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut graph = Graph::new();
        graph.add_edge(Named("a"), Named("b"));
        let mut sink = FailingSink { budget: 3 };
        let err = crate::dot::write_dot(&graph, &mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
