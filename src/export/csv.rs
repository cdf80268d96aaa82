//! CSV export implementation.
//!
//! Exports one row per import edge for spreadsheet use.

use super::{ExportData, Exporter};
use std::collections::HashMap;
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or line breaks.
    fn escape_field(value: &str) -> String {
        if value.contains(',')
            || value.contains('"')
            || value.contains('\n')
            || value.contains('\r')
        {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "from,to,from_label,to_label")?;

        let labels: HashMap<&str, &str> = data
            .nodes
            .iter()
            .map(|n| (n.name.as_str(), n.label.as_str()))
            .collect();

        for (from, to) in &data.edges {
            let from_label = labels.get(from.as_str()).copied().unwrap_or(from);
            let to_label = labels.get(to.as_str()).copied().unwrap_or(to);

            writeln!(
                writer,
                "{},{},{},{}",
                Self::escape_field(from),
                Self::escape_field(to),
                Self::escape_field(from_label),
                Self::escape_field(to_label)
            )?;
        }

        Ok(())
    }
}
