//! The output table: CSV persistence and a plain-text rendering for stdout.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::model::WeatherRecord;

/// Union of record fields, in record order. Every record carries the same
/// fields, so this is either the full header or nothing.
pub fn columns(records: &[WeatherRecord]) -> Vec<&'static str> {
    if records.is_empty() { Vec::new() } else { WeatherRecord::FIELDS.to_vec() }
}

/// Serialize records as CSV with a header row and no index column.
/// No records gives empty output.
pub fn to_csv(records: &[WeatherRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record).context("Failed to serialize weather record to CSV")?;
    }

    writer.into_inner().map_err(|e| e.into_error()).context("Failed to flush CSV output")
}

/// Write the whole table to `path` in a single write, replacing any
/// previous file.
pub fn write_csv(path: &Path, records: &[WeatherRecord]) -> Result<()> {
    let bytes = to_csv(records)?;

    fs::write(path, bytes)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    log::info!("wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

/// Read a file produced by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Vec<WeatherRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    reader
        .deserialize()
        .collect::<Result<Vec<WeatherRecord>, _>>()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}

/// Aligned text table with a row-number column.
pub fn render(records: &[WeatherRecord]) -> String {
    let columns = columns(records);
    if columns.is_empty() {
        return "Empty table: no weather records collected".to_string();
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
    rows.push(std::iter::once(String::new()).chain(columns.iter().map(|c| c.to_string())).collect());
    for (idx, record) in records.iter().enumerate() {
        let cells = record.values().into_iter().map(|v| v.unwrap_or("-").to_string());
        rows.push(std::iter::once(idx.to_string()).chain(cells).collect());
    }

    let mut widths = vec![0; columns.len() + 1];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, &width))| {
                    if i == 0 { format!("{cell:<width$}") } else { format!("{cell:>width$}") }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
