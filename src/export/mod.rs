//! Inventory output.
//!
//! Writes the audit result as a plain two-column CSV stream: a
//! `name,public_ip` header followed by one row per emitted pair. A real CSV
//! writer handles quoting, so names or addresses containing commas cannot
//! corrupt a row.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::Writer;

use crate::pipeline::InventoryRow;

/// Writes the inventory rows to `output`, or stdout if `None`.
///
/// Returns the number of rows written.
pub fn write_inventory(rows: &[InventoryRow], output: Option<&PathBuf>) -> Result<usize> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path).with_context(|| {
            format!("Failed to create output file: {}", path.display())
        })?),
        None => Box::new(io::stdout()),
    };
    write_inventory_to(rows, writer)
}

/// Writes the inventory rows to an arbitrary sink.
pub fn write_inventory_to(rows: &[InventoryRow], sink: impl Write) -> Result<usize> {
    let mut writer = Writer::from_writer(sink);

    writer.write_record(["name", "public_ip"])?;
    for row in rows {
        writer.write_record([row.name.as_str(), row.address.as_str()])?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// Convenience wrapper used by tests: renders the inventory as a CSV string.
pub fn render_inventory(rows: &[InventoryRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_inventory_to(rows, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, address: &str) -> InventoryRow {
        InventoryRow {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_header_only_for_empty_inventory() {
        let output = render_inventory(&[]).unwrap();
        assert_eq!(output, "name,public_ip\n");
    }

    #[test]
    fn test_rows_in_order() {
        let rows = vec![
            row("www.example.com.", "93.184.216.34"),
            row("app.example.com.", "34.120.1.2"),
        ];
        let output = render_inventory(&rows).unwrap();
        assert_eq!(
            output,
            "name,public_ip\nwww.example.com.,93.184.216.34\napp.example.com.,34.120.1.2\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        // The legacy output format corrupted rows on embedded commas; the
        // CSV writer quotes them instead.
        let rows = vec![row("weird,name.example.com.", "93.184.216.34")];
        let output = render_inventory(&rows).unwrap();
        assert_eq!(
            output,
            "name,public_ip\n\"weird,name.example.com.\",93.184.216.34\n"
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let rows = vec![row("www.example.com.", "93.184.216.34")];

        let written = write_inventory(&rows, Some(&path)).unwrap();
        assert_eq!(written, 1);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,public_ip\nwww.example.com.,93.184.216.34\n");
    }

    #[test]
    fn test_write_to_unwritable_path_fails_with_context() {
        let rows = vec![row("www.example.com.", "93.184.216.34")];
        let path = PathBuf::from("/nonexistent-dir/inventory.csv");
        let err = write_inventory(&rows, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
