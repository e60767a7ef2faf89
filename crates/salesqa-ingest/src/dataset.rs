//! CSV ingest.
//!
//! Columns are read as strings without type inference: the source data
//! mixes currency text, bare numbers, and blanks in the same column, and
//! all typing is owned by the rule checks. Headers are trimmed (and
//! BOM-stripped) because exported spreadsheets routinely pad them.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

/// Read a CSV file into an all-string frame with normalized headers.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("failed to open CSV: {}", path.display()))?
        .finish()
        .with_context(|| format!("failed to read CSV: {}", path.display()))?;

    let normalized: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_header(name))
        .collect();
    df.set_column_names(normalized)
        .context("failed to normalize CSV headers")?;

    Ok(df)
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
