//! Conversion driver: load the table, check the columns, transform every
//! row in source order and write one JSON array.
//!
//! # Example
//!
//! ```rust,ignore
//! use quizbank::{convert, ConvertConfig};
//!
//! let summary = convert(&ConvertConfig::new("bank.xlsx", "questions.json"))?;
//! println!("Converted {} questions", summary.count);
//! ```

use serde::Serialize;
use std::path::PathBuf;

use crate::config::ConvertConfig;
use crate::error::ConvertResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::QuestionRecord;
use crate::output::{to_pretty_json, write_atomic};
use crate::parser::{load_table, Table};

use super::columns::ColumnLayout;
use super::row::{transform_row, SourceRow};

/// Outcome of a successful [`convert`] run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    /// Number of questions written.
    pub count: usize,
    /// Rows skipped because every expected column was empty.
    pub skipped_blank: usize,
    /// Worksheet that was read.
    pub sheet: String,
    pub output_path: PathBuf,
}

/// Questions converted from one table.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub records: Vec<QuestionRecord>,
    /// 1-based row numbers of skipped blank rows.
    pub skipped_blank: Vec<usize>,
}

/// Convert the configured input file and write the JSON output.
///
/// Nothing is written unless every row converts.
pub fn convert(config: &ConvertConfig) -> ConvertResult<ConversionSummary> {
    log_info(format!("📖 Reading {}", config.input_path.display()));
    let table = load_table(&config.input_path, config.sheet.as_deref())?;
    log_success(format!("Sheet '{}': {} rows", table.sheet, table.len()));

    let conversion = convert_table(&table)?;

    log_info("💾 Writing JSON...");
    let json = to_pretty_json(&conversion.records)?;
    write_atomic(&config.output_path, &json)?;
    log_success(format!("Wrote {}", config.output_path.display()));

    Ok(ConversionSummary {
        count: conversion.records.len(),
        skipped_blank: conversion.skipped_blank.len(),
        sheet: table.sheet,
        output_path: config.output_path.clone(),
    })
}

/// Transform every row of an in-memory table.
///
/// The column layout is checked before any row, so a wrong schema fails
/// even when the table has no data rows. Blank rows are skipped and do not
/// count as a position: the id fallback numbers kept rows 1..N.
pub fn convert_table(table: &Table) -> ConvertResult<Conversion> {
    let layout = ColumnLayout::for_table(table)?;
    log_info(format!("📋 {} columns:", table.headers.len()));
    for (i, col) in table.headers.iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i + 1, col), 1);
    }

    if table.is_empty() {
        log_warning(format!("Sheet '{}' has no data rows", table.sheet));
    }

    let mut conversion = Conversion {
        records: Vec::with_capacity(table.len()),
        skipped_blank: Vec::new(),
    };

    for (index, cells) in table.rows.iter().enumerate() {
        let row = SourceRow::new(cells, &layout);
        if row.is_blank() {
            conversion.skipped_blank.push(index + 1);
            continue;
        }
        let position = conversion.records.len();
        conversion.records.push(transform_row(&row, position)?);
    }

    if !conversion.skipped_blank.is_empty() {
        log_warning(format!(
            "{} blank rows skipped (rows: {})",
            conversion.skipped_blank.len(),
            sample_rows(&conversion.skipped_blank)
        ));
    }
    if conversion.records.is_empty() {
        log_warning("No questions found");
    } else {
        log_success(format!("Converted {} questions", conversion.records.len()));
    }

    Ok(conversion)
}

fn sample_rows(rows: &[usize]) -> String {
    let sample: Vec<String> = rows.iter().take(5).map(|r| r.to_string()).collect();
    let more = if rows.len() > 5 {
        format!("... +{}", rows.len() - 5)
    } else {
        String::new()
    };
    format!("{}{}", sample.join(", "), more)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::models::{Cell, NO_EXPLANATION};
    use crate::transform::columns::REQUIRED_COLUMNS;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn table(rows: Vec<Vec<Cell>>) -> Table {
        let headers = REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect();
        Table::new("Sheet1", headers, rows)
    }

    fn question(id: Cell, title: &str) -> Vec<Cell> {
        vec![
            id,
            text(title),
            text("甲"),
            text("乙"),
            text("丙"),
            text("丁"),
            text("A"),
            Cell::Empty,
            Cell::Empty,
        ]
    }

    #[test]
    fn test_preserves_source_order() {
        let t = table(vec![
            question(Cell::Empty, "第一题"),
            question(Cell::Empty, "第二题"),
            question(Cell::Empty, "第三题"),
        ]);
        let conversion = convert_table(&t).unwrap();

        let titles: Vec<&str> = conversion.records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(titles, vec!["第一题", "第二题", "第三题"]);
        let ids: Vec<i64> = conversion.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(conversion.records[0].explanation, NO_EXPLANATION);
    }

    #[test]
    fn test_blank_rows_do_not_advance_fallback_id() {
        let t = table(vec![
            question(Cell::Empty, "第一题"),
            vec![Cell::Empty; 9],
            vec![Cell::Empty; 9],
            question(Cell::Empty, "第四行"),
            question(Cell::Float(9.0), "有编号"),
            question(Cell::Empty, "第六行"),
        ]);
        let conversion = convert_table(&t).unwrap();

        let ids: Vec<i64> = conversion.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 9, 4]);
        assert_eq!(conversion.skipped_blank, vec![2, 3]);
    }

    #[test]
    fn test_error_row_counts_kept_rows() {
        let mut bad = question(Cell::Empty, "坏题");
        bad[8] = text("高");
        let t = table(vec![vec![Cell::Empty; 9], bad]);

        let err = convert_table(&t).unwrap_err();
        assert!(matches!(err, ConvertError::TypeCoercionFailure { row: 1, .. }));
    }

    #[test]
    fn test_duplicate_ids_pass_through() {
        let t = table(vec![
            question(Cell::Float(1.0), "第一题"),
            question(Cell::Float(1.0), "第二题"),
        ]);
        let conversion = convert_table(&t).unwrap();
        assert!(conversion.records.iter().all(|r| r.id == 1));
    }

    #[test]
    fn test_wrong_schema_with_no_rows() {
        let t = Table::new("Sheet1", vec!["name".into()], vec![]);
        assert!(matches!(
            convert_table(&t),
            Err(ConvertError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_table_converts_to_nothing() {
        let conversion = convert_table(&table(vec![])).unwrap();
        assert!(conversion.records.is_empty());
    }

    #[test]
    fn test_first_bad_row_aborts() {
        let mut bad = question(Cell::Empty, "第二题");
        bad[8] = text("高");
        let t = table(vec![question(Cell::Empty, "第一题"), bad]);

        let err = convert_table(&t).unwrap_err();
        assert!(matches!(err, ConvertError::TypeCoercionFailure { row: 2, .. }));
    }

    #[test]
    fn test_sample_rows() {
        assert_eq!(sample_rows(&[2, 4]), "2, 4");
        assert_eq!(sample_rows(&[1, 2, 3, 4, 5, 6, 7]), "1, 2, 3, 4, 5... +2");
    }
}
