#![deny(unsafe_code)]

//! CSV export with the fixed, ordered column set.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use asset_model::{Record, fields};

/// Export columns, in output order: human-facing label and the canonical
/// field it renders.
pub const EXPORT_COLUMNS: [(&str, &str); 13] = [
    ("ID", fields::ID),
    ("Manufacturer", fields::MFG),
    ("Category", fields::CATEGORY),
    ("Asset Type", fields::ASSET_TYPE),
    ("Type", fields::TYPE),
    ("Product ID", fields::PRODUCT_ID),
    ("Description", fields::DESCRIPTION),
    ("Ship Date", fields::SHIP_DATE),
    ("Quantity", fields::QTY),
    ("Total Value", fields::TOTAL_VALUE),
    ("Support Coverage", fields::SUPPORT_COVERAGE),
    ("End of Sale", fields::END_OF_SALE),
    ("Last Support", fields::LAST_DAY_SUPPORT),
];

/// Writes the record sequence as CSV to a file.
pub fn write_csv_file(records: &[Record], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create export: {}", path.display()))?;
    write_csv(records, file).with_context(|| format!("write export: {}", path.display()))
}

/// Writes the record sequence as CSV to any writer.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer
        .write_record(EXPORT_COLUMNS.iter().map(|(label, _)| *label))
        .context("write header")?;
    for record in records {
        let row: Vec<String> = EXPORT_COLUMNS
            .iter()
            .map(|(_, field)| record.text(field).unwrap_or_else(|| fields::SENTINEL.to_string()))
            .collect();
        csv_writer.write_record(&row).context("write record")?;
    }
    csv_writer.flush().context("flush export")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_is_fixed() {
        let mut output = Vec::new();
        write_csv(&[], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text.trim_end(),
            "ID,Manufacturer,Category,Asset Type,Type,Product ID,Description,\
             Ship Date,Quantity,Total Value,Support Coverage,End of Sale,Last Support"
        );
    }

    #[test]
    fn renders_values_in_column_order() {
        let mut record = Record::new();
        record.set("id", 1i64);
        record.set("mfg", "Cisco");
        record.set("qty", 2.0);
        record.set("total_value", 1234.5);
        record.set("support_coverage", "Active");
        let mut output = Vec::new();
        write_csv(std::slice::from_ref(&record), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let data_line = text.lines().nth(1).unwrap();
        assert_eq!(data_line, "1,Cisco,-,-,-,-,-,-,2,1234.5,Active,-,-");
    }
}
