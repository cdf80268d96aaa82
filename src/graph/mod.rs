//! Graph module for package import relationships.
//!
//! This module classifies import paths, derives display labels, and builds
//! the [`ImportGraph`] of which repository packages import which others.
//!
//! # Example
//!
//! ```rust
//! use depcheck::graph::build_graph;
//! use depcheck::parser::{Package, PackageList};
//!
//! let pkgs = PackageList::new(vec![
//!     Package::new("/src/app", "github.com/acme/app", ["encoding/json", "github.com/acme/app/vendor/github.com/lib/pq"]),
//!     Package::new("/src/pq", "github.com/acme/app/vendor/github.com/lib/pq", Vec::<String>::new()),
//! ]);
//!
//! let graph = build_graph(&pkgs, &[], &[]).unwrap();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//!
//! let pq = graph.node_by_name("github.com/acme/app/vendor/github.com/lib/pq").unwrap();
//! assert_eq!(pq.label_name, "github.com/lib/pq");
//! ```

mod builder;
mod import_graph;
mod path;

pub use builder::{build_graph, GraphError};
pub use import_graph::{ImportGraph, Node};
pub use path::{is_valid_repo_path, label_for};
