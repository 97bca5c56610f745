//! # typegraph
//!
//! Type hierarchy and module dependency graphs, rendered as Graphviz DOT.
//!
//! A [`Manifest`] describes a program's modules and types. Builders walk it
//! into a [`Graph`], the name filter drops unwanted vertices, and
//! [`DotWriter`] turns the result into text for `dot` to lay out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use typegraph::{dependencies, filter_out_matching, DotWriter, Graph, Manifest};
//!
//! let manifest = Manifest::load(Path::new("program.json")).unwrap();
//!
//! let mut graph = Graph::new();
//! dependencies::add_everything(&mut graph, &manifest);
//!
//! let std_modules = regex::Regex::new(r"^std\.").unwrap();
//! let graph = filter_out_matching(&graph, &std_modules);
//!
//! DotWriter::default()
//!     .write_ranked_dot(&graph, &mut std::io::stdout())
//!     .unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod dot;
pub mod error;
pub mod graph;
pub mod manifest;

// Re-exports for convenience
pub use error::{Result, TypegraphError};

// Graph re-exports
pub use graph::{
    add_class_with_ancestors, add_module_types, add_module_with_dependencies, compile_patterns,
    dependencies, filter_out, filter_out_all, filter_out_matching, hierarchy, Entity, Graph,
    GraphSnapshot, GraphStats, Strategy,
};
pub use manifest::{Manifest, ManifestBuilder, ManifestFormat, Module, ModuleId, Type, TypeId};

// Output
pub use config::{OutputFormat, TypegraphConfig};
pub use dot::{in_degree_buckets, write_dot, write_ranked_dot, DotStyle, DotWriter};

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r#"
root: object.Object
modules:
  - name: object
    types:
      - name: object.Object
  - name: std.stdio
    imports: [object]
  - name: std.string
    imports: [object, std.stdio]
  - name: app.widgets
    imports: [object, std.stdio, app.core, std.stdio]
    types:
      - name: app.widgets.Widget
        base: object.Object
        interfaces: [app.core.Tweakable]
      - name: app.widgets.NotSoSpecialWidget
        base: app.widgets.Widget
  - name: app.core
    imports: [object, std.string, app.widgets]
    types:
      - name: app.core.Editable
      - name: app.core.Tweakable
        interfaces: [app.core.Editable]
"#;

    fn program() -> Manifest {
        Manifest::parse(PROGRAM, ManifestFormat::Yaml).unwrap()
    }

    #[test]
    fn test_hierarchy_end_to_end() {
        let manifest = program();
        let mut graph = Graph::new();
        hierarchy::add_everything(&mut graph, &manifest);

        let stats = graph.stats();
        assert_eq!(stats.vertices, 5);
        assert_eq!(stats.interfaces, 2);
        assert_eq!(stats.edges, 4);

        let graph = filter_out_matching(&graph, &regex::Regex::new(r"^object\.").unwrap());
        let dot = DotWriter::default().to_dot_string(&graph);

        let interfaces = dot
            .split("//Interface nodes.\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        assert!(interfaces.contains("\"app.core.Tweakable\";"));
        assert!(interfaces.contains("\"app.core.Editable\";"));
        assert!(!interfaces.contains("Widget"));

        assert!(dot.contains("\"app.widgets.NotSoSpecialWidget\" -> \"app.widgets.Widget\";"));
        assert!(dot.contains("\"app.widgets.Widget\" -> \"app.core.Tweakable\";"));
        assert!(dot.contains("\"app.core.Tweakable\" -> \"app.core.Editable\";"));
        assert!(!dot.contains("object.Object"));
    }

    #[test]
    fn test_dependencies_end_to_end() {
        let manifest = program();
        let mut graph = Graph::new();
        dependencies::add_everything(&mut graph, &manifest);

        // app.widgets <-> app.core is a cycle; both edges are present once
        let widgets = manifest.find_module("app.widgets").unwrap();
        let core = manifest.find_module("app.core").unwrap();
        assert!(graph.has_edge(&widgets, &core));
        assert!(graph.has_edge(&core, &widgets));
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 9);

        let patterns = compile_patterns(&[r"^std\.", r"^object$"]).unwrap();
        let graph = filter_out_all(graph, &patterns);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);

        let dot = DotWriter::default().to_ranked_dot_string(&graph);
        assert!(dot.contains("{rank=same rank_1; \"app.widgets\"; \"app.core\";}"));
    }

    #[test]
    fn test_direct_dependencies_of_one_module() {
        let manifest = program();
        let mut graph = Graph::new();
        let widgets = manifest.find_module("app.widgets").unwrap();
        add_module_with_dependencies(&mut graph, widgets, Strategy::Direct);

        let imported: Vec<_> = graph.edges().map(|(_, to)| to.name()).collect();
        assert_eq!(imported, vec!["object", "std.stdio", "app.core"]);
    }

    #[test]
    fn test_ranked_buckets_cover_every_module() {
        let manifest = program();
        let mut graph = Graph::new();
        dependencies::add_everything(&mut graph, &manifest);

        let buckets = in_degree_buckets(&graph);
        let total: usize = buckets.values().map(Vec::len).sum();
        assert_eq!(total, graph.vertex_count());
        // object is imported by every other module
        assert_eq!(buckets.keys().last(), Some(&4));
    }

    #[test]
    fn test_empty_manifest_renders() {
        let manifest = Manifest::parse("{}", ManifestFormat::Json).unwrap();
        let mut graph: Graph<Type<'_>> = Graph::new();
        hierarchy::add_everything(&mut graph, &manifest);
        let dot = DotWriter::default().to_dot_string(&graph);
        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
    }
}
