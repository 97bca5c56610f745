//! Type hierarchy builder.
//!
//! Records "subtype -> supertype" edges for implemented interfaces and base
//! types. Expansion of each type happens at most once per call, so diamond
//! interface hierarchies cost O(ancestors) and a malformed interface cycle
//! cannot recurse forever.

use std::collections::HashSet;
use tracing::{debug, info};

use super::engine::Graph;
use crate::manifest::{Manifest, Module, Type, TypeId};

/// Add `ty` and every ancestor reachable through interfaces and base types.
pub fn add_class_with_ancestors<'m>(graph: &mut Graph<Type<'m>>, ty: Type<'m>) {
    let mut expanded = HashSet::new();
    expand(graph, ty, &mut expanded);
}

fn expand<'m>(graph: &mut Graph<Type<'m>>, ty: Type<'m>, expanded: &mut HashSet<TypeId>) {
    if !expanded.insert(ty.id()) {
        return;
    }
    graph.add_vertex(ty);

    for interface in ty.interfaces() {
        graph.add_edge(ty, interface);
        expand(graph, interface, expanded);
    }

    if let Some(base) = ty.base() {
        graph.add_edge(ty, base);
        expand(graph, base, expanded);
    }
}

/// Add every type declared directly in `module`, with ancestors.
pub fn add_module_types<'m>(graph: &mut Graph<Type<'m>>, module: Module<'m>) {
    debug!(module = module.name(), "adding module types");
    for ty in module.types() {
        add_class_with_ancestors(graph, ty);
    }
}

/// Add every type of every module in the manifest.
pub fn add_everything<'m>(graph: &mut Graph<Type<'m>>, manifest: &'m Manifest) {
    for module in manifest.modules() {
        add_module_types(graph, module);
    }
    info!(
        types = graph.vertex_count(),
        edges = graph.edge_count(),
        "type hierarchy built"
    );
}
