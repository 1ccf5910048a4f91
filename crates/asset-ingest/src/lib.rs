#![deny(unsafe_code)]

//! CSV decoding into the raw-row sequence.
//!
//! The decoder is deliberately dumb: it strips BOMs, trims cells, skips
//! fully-blank rows, and emits loosely-typed [`RawRow`]s. All interpretation
//! of the values belongs to the normalizer.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use asset_model::{RawRow, RawValue};

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into ordered raw rows keyed by the file's headers.
pub fn read_raw_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open csv: {}", path.display()))?;
    read_raw_rows_from(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Reads CSV content from any reader into ordered raw rows.
pub fn read_raw_rows_from<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("read headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("read record")?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = RawRow::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = record.get(index).map(normalize_cell).unwrap_or_default();
            let value = if cell.is_empty() {
                RawValue::Missing
            } else {
                RawValue::Text(cell)
            };
            row.push(header.clone(), value);
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), "decoded csv input");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_headers_and_rows() {
        let input = "Vendor,Qty,Coverage\nCisco,2,Covered\nHPE,,\n";
        let rows = read_raw_rows_from(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Vendor"), Some(&RawValue::Text("Cisco".to_string())));
        assert_eq!(rows[1].get("Qty"), Some(&RawValue::Missing));
    }

    #[test]
    fn skips_blank_rows_and_bom() {
        let input = "\u{feff}Vendor,Qty\nCisco,1\n,,\n , \nHPE,2\n";
        let rows = read_raw_rows_from(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Vendor"), Some(&RawValue::Text("Cisco".to_string())));
        assert_eq!(rows[1].get("Vendor"), Some(&RawValue::Text("HPE".to_string())));
    }

    #[test]
    fn short_records_fill_missing() {
        let input = "Vendor,Qty,Coverage\nCisco\n";
        let rows = read_raw_rows_from(input.as_bytes()).unwrap();
        assert_eq!(rows[0].get("Coverage"), Some(&RawValue::Missing));
    }

    #[test]
    fn empty_file_yields_no_rows() {
        let rows = read_raw_rows_from("Vendor,Qty\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn header_whitespace_collapsed() {
        let input = "  Ship   Date ,Qty\n2024-01-01,1\n";
        let rows = read_raw_rows_from(input.as_bytes()).unwrap();
        assert!(rows[0].get("Ship Date").is_some());
    }
}
