//! Import graph implementation using petgraph.
//!
//! Provides a directed graph of packages where an edge `a -> b` means
//! package `a` imports package `b`. Graphs are assembled by the builder and
//! are read-only for everyone else.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt;

/// Represents a package in the import graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    /// Full import path; identity key for lookups and edges
    pub unique_name: String,
    /// Display name, vendor prefix stripped; not necessarily unique
    pub label_name: String,
}

impl Node {
    /// Creates a new node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depcheck::graph::Node;
    ///
    /// let node = Node::new("github.com/a/repo/vendor/github.com/b/lib", "github.com/b/lib");
    /// assert_eq!(node.unique_name, "github.com/a/repo/vendor/github.com/b/lib");
    /// assert_eq!(node.label_name, "github.com/b/lib");
    /// ```
    pub fn new(unique_name: impl Into<String>, label_name: impl Into<String>) -> Self {
        Self {
            unique_name: unique_name.into(),
            label_name: label_name.into(),
        }
    }

    /// Returns true if the label differs from the unique name.
    pub fn is_vendored(&self) -> bool {
        self.unique_name != self.label_name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unique_name)
    }
}

/// A directed graph of package imports.
///
/// Uses petgraph's `DiGraph` internally with a name index for O(1) lookup.
/// Every edge connects two nodes of the same graph.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    /// The underlying directed graph
    graph: DiGraph<Node, ()>,
    /// Maps unique names to their node indices
    node_indices: HashMap<String, NodeIndex>,
}

impl ImportGraph {
    /// Creates a new empty import graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depcheck::graph::ImportGraph;
    ///
    /// let graph = ImportGraph::new();
    /// assert_eq!(graph.node_count(), 0);
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a node, returning the existing index if the unique name is taken.
    pub(crate) fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&node.unique_name) {
            return idx;
        }

        let name = node.unique_name.clone();
        let idx = self.graph.add_node(node);
        self.node_indices.insert(name, idx);
        idx
    }

    /// Adds an edge from `from` to `to`.
    ///
    /// Returns `false` without touching the graph if either endpoint is
    /// missing. Repeated calls for the same pair keep a single edge.
    pub(crate) fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(&from_idx), Some(&to_idx)) =
            (self.node_indices.get(from), self.node_indices.get(to))
        else {
            return false;
        };

        self.graph.update_edge(from_idx, to_idx, ());
        true
    }

    /// Gets all nodes in the graph, in creation order.
    pub fn nodes(&self) -> Vec<&Node> {
        self.graph.node_weights().collect()
    }

    /// Looks up a node by its unique name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_indices
            .get(name)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Checks if a node with this unique name is a member of the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Checks whether `from` imports `to`.
    pub fn has_edge_from_to(&self, from: &str, to: &str) -> bool {
        match (self.node_indices.get(from), self.node_indices.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => self.graph.contains_edge(from_idx, to_idx),
            _ => false,
        }
    }

    /// Gets the packages imported by `name` (outgoing edges).
    pub fn dependencies(&self, name: &str) -> Vec<&Node> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .filter_map(|edge| self.graph.node_weight(edge.target()))
            .collect()
    }

    /// Gets the packages importing `name` (incoming edges).
    pub fn dependents(&self, name: &str) -> Vec<&Node> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Incoming)
            .filter_map(|edge| self.graph.node_weight(edge.source()))
            .collect()
    }

    /// Gets every edge as a `(from, to)` pair of nodes.
    pub fn edges(&self) -> Vec<(&Node, &Node)> {
        self.graph
            .edge_references()
            .filter_map(|edge| {
                let from = self.graph.node_weight(edge.source())?;
                let to = self.graph.node_weight(edge.target())?;
                Some((from, to))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
