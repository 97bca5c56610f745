//! Module dependency builder.
//!
//! Records "importer -> imported" edges. Import graphs are cyclic in
//! practice: the transitive walk only descends into an imported module when
//! the edge leading to it is new, which bounds the walk by the edge count.

use tracing::{debug, info};

use super::engine::Graph;
use super::types::Strategy;
use crate::manifest::{Manifest, Module};

/// Add `module` and its imports according to `strategy`.
pub fn add_module_with_dependencies<'m>(
    graph: &mut Graph<Module<'m>>,
    module: Module<'m>,
    strategy: Strategy,
) {
    debug!(module = module.name(), %strategy, "adding module dependencies");
    graph.add_vertex(module);

    match strategy {
        Strategy::Direct => {
            for imported in module.imports() {
                graph.add_edge(module, imported);
            }
        }
        Strategy::Transitive => {
            // Depth-first, in import order. Each frame holds the imports
            // still to visit for one module.
            let mut stack = vec![(module, module.imports())];
            while let Some((current, imports)) = stack.last_mut() {
                let current = *current;
                match imports.next() {
                    Some(imported) => {
                        if graph.add_edge(current, imported) {
                            stack.push((imported, imported.imports()));
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }
    }
}

/// Add every module in the manifest with its transitive imports.
pub fn add_everything<'m>(graph: &mut Graph<Module<'m>>, manifest: &'m Manifest) {
    for module in manifest.modules() {
        add_module_with_dependencies(graph, module, Strategy::Transitive);
    }
    info!(
        modules = graph.vertex_count(),
        edges = graph.edge_count(),
        "module dependency graph built"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestBuilder;

    fn names<'a>(graph: &'a Graph<Module<'_>>) -> Vec<(&'a str, &'a str)> {
        graph.edges().map(|(a, b)| (a.name(), b.name())).collect()
    }

    #[test]
    fn test_import_cycle_terminates() {
        let mut b = ManifestBuilder::new();
        let a = b.add_module("A");
        let m = b.add_module("B");
        b.add_import(a, m).add_import(m, a);
        let manifest = b.build();

        let mut graph = Graph::new();
        add_module_with_dependencies(&mut graph, manifest.module(a), Strategy::Transitive);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(names(&graph), vec![("A", "B"), ("B", "A")]);
    }

    #[test]
    fn test_self_import() {
        let mut b = ManifestBuilder::new();
        let a = b.add_module("A");
        b.add_import(a, a);
        let manifest = b.build();

        let mut graph = Graph::new();
        add_module_with_dependencies(&mut graph, manifest.module(a), Strategy::Transitive);
        assert_eq!(names(&graph), vec![("A", "A")]);
    }

    #[test]
    fn test_transitive_follows_chain_in_order() {
        let mut b = ManifestBuilder::new();
        let app = b.add_module("app");
        let core = b.add_module("core");
        let util = b.add_module("util");
        let io = b.add_module("io");
        b.add_import(app, core)
            .add_import(app, io)
            .add_import(core, util)
            .add_import(util, io);
        let manifest = b.build();

        let mut graph = Graph::new();
        add_module_with_dependencies(&mut graph, manifest.module(app), Strategy::Transitive);

        assert_eq!(
            names(&graph),
            vec![
                ("app", "core"),
                ("core", "util"),
                ("util", "io"),
                ("app", "io"),
            ]
        );
    }

    #[test]
    fn test_repeated_imports_are_deduplicated() {
        let mut b = ManifestBuilder::new();
        let a = b.add_module("A");
        let m = b.add_module("B");
        b.add_import(a, m).add_import(a, m).add_import(a, m);
        let manifest = b.build();

        for strategy in [Strategy::Transitive, Strategy::Direct] {
            let mut graph = Graph::new();
            add_module_with_dependencies(&mut graph, manifest.module(a), strategy);
            assert_eq!(graph.edge_count(), 1);
        }
    }

    #[test]
    fn test_direct_does_not_recurse() {
        let mut b = ManifestBuilder::new();
        let a = b.add_module("A");
        let m = b.add_module("B");
        let c = b.add_module("C");
        b.add_import(a, m).add_import(m, c);
        let manifest = b.build();

        let mut graph = Graph::new();
        add_module_with_dependencies(&mut graph, manifest.module(a), Strategy::Direct);
        assert_eq!(names(&graph), vec![("A", "B")]);
        assert!(!graph.contains_vertex(&manifest.module(c)));
    }

    #[test]
    fn test_module_without_imports_is_a_vertex() {
        let mut b = ManifestBuilder::new();
        let lonely = b.add_module("lonely");
        let manifest = b.build();

        let mut graph = Graph::new();
        add_module_with_dependencies(&mut graph, manifest.module(lonely), Strategy::Transitive);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_everything_covers_all_modules() {
        let mut b = ManifestBuilder::new();
        let a = b.add_module("A");
        let m = b.add_module("B");
        b.add_module("C");
        b.add_import(a, m).add_import(m, a);
        let manifest = b.build();

        let mut graph = Graph::new();
        add_everything(&mut graph, &manifest);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }
}
