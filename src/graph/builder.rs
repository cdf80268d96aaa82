//! Builds an [`ImportGraph`] from a [`PackageList`].

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, info, trace};

use super::import_graph::{ImportGraph, Node};
use super::path::{is_valid_repo_path, label_for};
use crate::parser::{Package, PackageList};

/// Errors that can occur while building an import graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A requested root has no node in the finished graph.
    #[error("no corresponding node found for the root name {root:?}")]
    MissingRoot { root: String },
}

/// Builds the import graph for `pkgs`.
///
/// Every package with a valid repository path that is not listed in
/// `excludes` becomes a node, whether or not it is reachable from a root.
/// Imports become edges only when both ends are nodes; standard library,
/// malformed, unknown and excluded imports are dropped silently.
///
/// `roots` are only checked for existence. The first root without a node
/// fails the whole build.
///
/// # Example
///
/// ```rust
/// use depcheck::graph::build_graph;
/// use depcheck::parser::{Package, PackageList};
///
/// let pkgs = PackageList::new(vec![
///     Package::new("/src/app", "github.com/acme/app", ["fmt", "github.com/acme/db"]),
///     Package::new("/src/db", "github.com/acme/db", Vec::<String>::new()),
/// ]);
///
/// let graph = build_graph(&pkgs, &["github.com/acme/app"], &[]).unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.has_edge_from_to("github.com/acme/app", "github.com/acme/db"));
///
/// let err = build_graph(&pkgs, &["github.com/acme/nope"], &[]).unwrap_err();
/// assert!(err.to_string().contains("no corresponding node found for the root name"));
/// ```
pub fn build_graph(
    pkgs: &PackageList,
    roots: &[&str],
    excludes: &[&str],
) -> Result<ImportGraph, GraphError> {
    let excluded: HashSet<&str> = excludes.iter().copied().collect();

    let mut lookup: HashMap<&str, &Package> = HashMap::with_capacity(pkgs.len());
    let mut order: Vec<&str> = Vec::with_capacity(pkgs.len());
    for pkg in pkgs {
        // First occurrence of an import path wins.
        if let Entry::Vacant(slot) = lookup.entry(pkg.import_path.as_str()) {
            slot.insert(pkg);
            order.push(pkg.import_path.as_str());
        }
    }

    let mut graph = ImportGraph::with_capacity(order.len(), order.len());

    for &import_path in &order {
        if !is_valid_repo_path(import_path) {
            debug!(package = import_path, "skipping package with invalid import path");
            continue;
        }
        if excluded.contains(import_path) {
            debug!(package = import_path, "excluding package");
            continue;
        }
        graph.add_node(Node::new(import_path, label_for(import_path)));
    }

    for &import_path in &order {
        if !graph.contains(import_path) {
            continue;
        }
        let Some(pkg) = lookup.get(import_path) else {
            continue;
        };

        for dep in &pkg.imports {
            if !is_valid_repo_path(dep) {
                trace!(package = import_path, import = %dep, "dropping non-repository import");
                continue;
            }
            if !graph.add_edge(import_path, dep) {
                debug!(package = import_path, import = %dep, "no node for import");
            }
        }
    }

    for &root in roots {
        if !graph.contains(root) {
            return Err(GraphError::MissingRoot {
                root: root.to_string(),
            });
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built import graph"
    );
    Ok(graph)
}
