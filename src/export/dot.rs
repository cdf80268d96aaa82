//! Graphviz DOT export implementation.
//!
//! Nodes are keyed by unique name and displayed with their label, so two
//! vendor trees carrying the same upstream package stay separate boxes.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

impl DotExporter {
    fn escape(value: &str) -> String {
        value.replace('\\', "\\\\").replace('"', "\\\"")
    }
}

impl Exporter for DotExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph depcheck {{")?;
        writeln!(writer, "  node [shape=box];")?;

        for node in &data.nodes {
            writeln!(
                writer,
                "  \"{}\" [label=\"{}\"];",
                Self::escape(&node.name),
                Self::escape(&node.label)
            )?;
        }

        for (from, to) in &data.edges {
            writeln!(
                writer,
                "  \"{}\" -> \"{}\";",
                Self::escape(from),
                Self::escape(to)
            )?;
        }

        writeln!(writer, "}}")
    }
}
