//! Transformation module.
//!
//! - Columns: fixed column names and header resolution
//! - Row: source row to question record
//! - Pipeline: load, transform, write

pub mod columns;
pub mod pipeline;
pub mod row;

pub use columns::ColumnLayout;
pub use pipeline::*;
pub use row::{transform_row, SourceRow};
