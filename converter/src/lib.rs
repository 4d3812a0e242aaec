//! # Quizbank - spreadsheet to JSON question bank converter
//!
//! Quizbank reads a sheet of single-choice quiz questions (Excel, OpenDocument
//! or CSV) and converts each row into a question object of a JSON array.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ XLSX / CSV  │────▶│   Parser    │────▶│  Transform  │────▶│  JSON array │
//! │  (sheet)    │     │ (calamine)  │     │  (per row)  │     │  (atomic)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quizbank::{convert, ConvertConfig};
//!
//! let summary = convert(&ConvertConfig::new("bank.xlsx", "questions.json")).unwrap();
//! println!("Converted {} questions", summary.count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per layer
//! - [`models`] - Cells and question records
//! - [`parser`] - Workbook and CSV loading
//! - [`transform`] - Column layout, row transformer and pipeline
//! - [`output`] - JSON serialization and atomic writes
//! - [`inspect`] - Column and row sampling
//! - [`config`] - Input/output configuration
//! - [`logs`] - Progress logging

// Core modules
pub mod error;
pub mod models;

// Input
pub mod config;
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod inspect;
pub mod output;

pub mod logs;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConvertError, ConvertResult, SheetError, SheetResult};

pub use models::{Cell, QuestionRecord, DEFAULT_SCORE, NO_EXPLANATION};

pub use config::{ConfigLayer, ConvertConfig};

pub use parser::{load_table, Table};

pub use transform::{
    convert,
    convert_table,
    transform_row,
    ColumnLayout,
    Conversion,
    ConversionSummary,
    SourceRow,
};

pub use inspect::{inspect, Inspection, DEFAULT_SAMPLE_ROWS};
