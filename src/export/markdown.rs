//! Markdown export implementation.
//!
//! Exports the import graph in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Package Import Report")?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Packages | {} |", data.nodes.len())?;
        writeln!(writer, "| Imports | {} |", data.edges.len())?;
        writeln!(writer, "| Vendored Packages | {} |", data.vendored_count())?;
        writeln!(writer)?;

        if data.nodes.is_empty() {
            writeln!(writer, "No repository packages found.")?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "## Packages")?;
            writeln!(writer)?;

            for node in &data.nodes {
                writeln!(writer, "### `{}`", node.label)?;
                writeln!(writer)?;
                if node.vendored {
                    writeln!(writer, "Vendored at `{}`", node.name)?;
                    writeln!(writer)?;
                }

                if node.imports.is_empty() {
                    writeln!(writer, "_No repository imports._")?;
                } else {
                    for import in &node.imports {
                        writeln!(writer, "- `{}`", import)?;
                    }
                }
                writeln!(writer)?;

                if !node.imported_by.is_empty() {
                    writeln!(writer, "Imported by:")?;
                    writeln!(writer)?;
                    for importer in &node.imported_by {
                        writeln!(writer, "- `{}`", importer)?;
                    }
                    writeln!(writer)?;
                }
            }
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by depcheck*")?;

        Ok(())
    }
}
