//! Export functionality for import graphs.
//!
//! This module provides exporters for rendering a built [`ImportGraph`]
//! in various formats: Graphviz DOT, JSON, CSV, and Markdown.

pub mod csv;
pub mod dot;
pub mod json;
pub mod markdown;

use crate::graph::{ImportGraph, Node};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Graphviz DOT - feed to `dot -Tsvg`
    #[default]
    Dot,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - one edge per row
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(ExportFormat::Dot),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: dot, json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Dot => write!(f, "dot"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// A node as seen by exporters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExportNode {
    pub name: String,
    pub label: String,
    pub vendored: bool,
    /// Unique names of the packages this one imports, sorted
    pub imports: Vec<String>,
    /// Unique names of the packages importing this one, sorted
    pub imported_by: Vec<String>,
}

/// Data container for export operations.
///
/// A sorted snapshot of the graph so every format renders in a stable
/// order regardless of input order.
#[derive(Debug, Clone, Default)]
pub struct ExportData {
    /// Nodes sorted by unique name
    pub nodes: Vec<ExportNode>,
    /// `(from, to)` unique-name pairs, sorted
    pub edges: Vec<(String, String)>,
}

impl ExportData {
    /// Snapshot a built graph.
    pub fn new(graph: &ImportGraph) -> Self {
        let mut nodes: Vec<ExportNode> = graph
            .nodes()
            .into_iter()
            .map(|n| ExportNode {
                name: n.unique_name.clone(),
                label: n.label_name.clone(),
                vendored: n.is_vendored(),
                imports: sorted_names(graph.dependencies(&n.unique_name)),
                imported_by: sorted_names(graph.dependents(&n.unique_name)),
            })
            .collect();
        nodes.sort();

        let mut edges: Vec<(String, String)> = graph
            .edges()
            .into_iter()
            .map(|(from, to)| (from.unique_name.clone(), to.unique_name.clone()))
            .collect();
        edges.sort();

        Self { nodes, edges }
    }

    /// Count of nodes whose label differs from their unique name.
    pub fn vendored_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.vendored).count()
    }
}

fn sorted_names(nodes: Vec<&Node>) -> Vec<String> {
    let mut names: Vec<String> = nodes.into_iter().map(|n| n.unique_name.clone()).collect();
    names.sort();
    names
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export a graph in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    graph: &ImportGraph,
    writer: &mut W,
) -> io::Result<()> {
    let data = ExportData::new(graph);
    match format {
        ExportFormat::Dot => dot::DotExporter.export(&data, writer),
        ExportFormat::Json => json::JsonExporter.export(&data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(&data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(&data, writer),
    }
}

/// Export a graph to a string.
pub fn export_to_string(format: ExportFormat, graph: &ImportGraph) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::graph::{build_graph, ImportGraph};
    use crate::parser::{Package, PackageList};

    /// app -> db, app -> vendored pq, db -> vendored pq
    pub fn sample_graph() -> ImportGraph {
        let pkgs = PackageList::new(vec![
            Package::new(
                "/src/app",
                "github.com/acme/app",
                [
                    "fmt",
                    "github.com/acme/db",
                    "github.com/acme/app/vendor/github.com/lib/pq",
                ],
            ),
            Package::new(
                "/src/db",
                "github.com/acme/db",
                ["github.com/acme/app/vendor/github.com/lib/pq"],
            ),
            Package::new(
                "/src/app/vendor/github.com/lib/pq",
                "github.com/acme/app/vendor/github.com/lib/pq",
                ["database/sql"],
            ),
        ]);
        build_graph(&pkgs, &["github.com/acme/app"], &[]).unwrap()
    }
}
