//! JSON export implementation.
//!
//! Exports the import graph in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable node for JSON output.
#[derive(Serialize)]
struct JsonNode<'a> {
    name: &'a str,
    label: &'a str,
}

/// Serializable edge for JSON output.
#[derive(Serialize)]
struct JsonEdge<'a> {
    from: &'a str,
    to: &'a str,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    nodes: usize,
    edges: usize,
    vendored: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    summary: JsonSummary,
    nodes: Vec<JsonNode<'a>>,
    edges: Vec<JsonEdge<'a>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            summary: JsonSummary {
                nodes: data.nodes.len(),
                edges: data.edges.len(),
                vendored: data.vendored_count(),
            },
            nodes: data
                .nodes
                .iter()
                .map(|n| JsonNode {
                    name: n.name.as_str(),
                    label: n.label.as_str(),
                })
                .collect(),
            edges: data
                .edges
                .iter()
                .map(|(from, to)| JsonEdge {
                    from: from.as_str(),
                    to: to.as_str(),
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_graph;
    use crate::graph::ImportGraph;

    fn render(graph: &ImportGraph) -> serde_json::Value {
        let data = ExportData::new(graph);
        let mut output = Vec::new();
        JsonExporter.export(&data, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_export_summary() {
        let parsed = render(&sample_graph());
        assert_eq!(parsed["summary"]["nodes"], 3);
        assert_eq!(parsed["summary"]["edges"], 3);
        assert_eq!(parsed["summary"]["vendored"], 1);
    }

    #[test]
    fn test_json_export_nodes() {
        let parsed = render(&sample_graph());
        let nodes = parsed["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1]["name"], "github.com/acme/app/vendor/github.com/lib/pq");
        assert_eq!(nodes[1]["label"], "github.com/lib/pq");
    }

    #[test]
    fn test_json_export_edges() {
        let parsed = render(&sample_graph());
        let edges = parsed["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0]["from"], "github.com/acme/app");
        assert_eq!(edges[0]["to"], "github.com/acme/app/vendor/github.com/lib/pq");
    }

    #[test]
    fn test_json_export_empty_graph() {
        let parsed = render(&ImportGraph::new());
        assert_eq!(parsed["summary"]["nodes"], 0);
        assert!(parsed["edges"].as_array().unwrap().is_empty());
    }
}
