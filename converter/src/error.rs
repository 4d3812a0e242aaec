//! Error types for the quiz bank conversion pipeline.
//!
//! Each layer owns its error type:
//!
//! - [`SheetError`] - loading a workbook or CSV file
//! - [`ConfigError`] - resolving the input/output configuration
//! - [`ConvertError`] - top-level conversion errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Table Loading Errors
// =============================================================================

/// Errors while loading the tabular source.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Extension is neither a workbook nor a delimited text format.
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The workbook could not be opened or read.
    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    /// Requested worksheet is not in the workbook.
    #[error("Sheet '{name}' not found (available: {})", .available.join(", "))]
    SheetNotFound { name: String, available: Vec<String> },

    /// The sheet has no header row.
    #[error("Sheet '{0}' is empty")]
    EmptySheet(String),

    /// Invalid CSV content.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for SheetError {
    fn from(err: calamine::Error) -> Self {
        SheetError::Workbook(err.to_string())
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while resolving [`crate::config::ConvertConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No input path from CLI, environment or config file.
    #[error("No input path configured (pass INPUT, set QUIZBANK_INPUT or use --config)")]
    MissingInput,

    /// No output path from CLI, environment or config file.
    #[error("No output path configured (pass --output, set QUIZBANK_OUTPUT or use --config)")]
    MissingOutput,

    /// Config file could not be read.
    #[error("Cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON.
    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert`].
/// Each failure cause has its own variant so callers can match on it.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other failure while loading the table.
    #[error("{0}")]
    Load(SheetError),

    /// Expected columns are absent from the header row.
    #[error("Missing columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A non-blank row has no question title.
    #[error("Row {row}: question title is empty")]
    MissingTitle { row: usize },

    /// A cell could not be coerced to an integer.
    #[error("Row {row}, column '{column}' (value '{value}'): not an integer")]
    TypeCoercionFailure {
        row: usize,
        column: String,
        value: String,
    },

    /// The output file could not be written.
    #[error("Cannot write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<SheetError> for ConvertError {
    fn from(err: SheetError) -> Self {
        match err {
            SheetError::FileNotFound(path) => ConvertError::FileNotFound(path),
            other => ConvertError::Load(other),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for table loading.
pub type SheetResult<T> = Result<T, SheetError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
