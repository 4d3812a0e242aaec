//! Sheet inspection: column names and a sample of rows, for checking a
//! workbook's layout before converting it.

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::SheetResult;
use crate::parser::{load_table, Table};

/// Rows shown when no count is given.
pub const DEFAULT_SAMPLE_ROWS: usize = 3;

/// Column names and sampled values of one sheet.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub sheet: String,
    pub columns: Vec<String>,
    /// Total data rows in the sheet.
    pub row_count: usize,
    /// `{column: {row_index: value}}` for the first sampled rows.
    pub sample: Value,
}

/// Load `path` and sample its first `rows` rows.
pub fn inspect<P: AsRef<Path>>(path: P, sheet: Option<&str>, rows: usize) -> SheetResult<Inspection> {
    let table = load_table(path, sheet)?;
    Ok(inspect_table(&table, rows))
}

/// Sample an in-memory table.
pub fn inspect_table(table: &Table, rows: usize) -> Inspection {
    let shown = rows.min(table.len());
    let mut sample = Map::new();

    for (col, name) in table.headers.iter().enumerate() {
        let values: Map<String, Value> = (0..shown)
            .map(|row| (row.to_string(), table.cell(row, col).to_json()))
            .collect();
        sample.insert(name.clone(), Value::Object(values));
    }

    Inspection {
        sheet: table.sheet.clone(),
        columns: table.headers.clone(),
        row_count: table.len(),
        sample: Value::Object(sample),
    }
}
