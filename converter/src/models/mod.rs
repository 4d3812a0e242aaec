//! Domain models for the quiz bank converter.
//!
//! - [`Cell`] - A scalar value read from the source table
//! - [`QuestionRecord`] - One converted quiz question (output JSON object)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Cell
// =============================================================================

/// A single scalar read from a worksheet or CSV file.
///
/// `Empty` is the only "null" value: a blank cell or an empty CSV field.
/// A whitespace-only text cell is not null.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Whether the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Coerce to an integer the way spreadsheet tools do: floats are
    /// truncated toward zero, booleans count as 0/1 and text is parsed.
    ///
    /// Returns `None` for empty cells and for values that are not numbers.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Empty => None,
            Cell::Int(i) => Some(*i),
            Cell::Float(f) => float_to_integer(*f),
            Cell::Bool(b) => Some(i64::from(*b)),
            Cell::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_integer))
            }
        }
    }

    /// Convert to a JSON scalar (`Empty` becomes `null`).
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Empty => Value::Null,
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Int(i) => Value::from(*i),
            Cell::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Bool(b) => Value::Bool(*b),
        }
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    if f.is_finite() && f.trunc() >= i64::MIN as f64 && f.trunc() <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{}", i),
            // Whole numbers stored as floats print without a trailing ".0"
            Cell::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{:.0}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

// =============================================================================
// Question Record
// =============================================================================

/// Placeholder written when a question has no explanation ("no explanation yet").
pub const NO_EXPLANATION: &str = "暂无解析";

/// Score given to a question whose score cell is empty.
pub const DEFAULT_SCORE: i64 = 1;

/// One converted quiz question, serialized as an object of the output array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Identifier column value, or the 1-based source position.
    pub id: i64,
    /// Question title.
    pub question: String,
    /// `"A. ..."` to `"D. ..."`, missing options omitted.
    pub options: Vec<String>,
    /// Correct answer letter(s), trimmed.
    pub answer: String,
    pub explanation: String,
    pub score: i64,
}

// =============================================================================
// Tests
// =============================================================================
