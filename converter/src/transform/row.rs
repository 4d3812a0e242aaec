//! Row transformer: one source row plus its position becomes one
//! [`QuestionRecord`].
//!
//! Each output field is derived independently:
//!
//! | Field         | Rule                                                    |
//! |---------------|---------------------------------------------------------|
//! | `id`          | identifier as integer, else `position + 1`              |
//! | `question`    | title text                                              |
//! | `options`     | `"<Letter>. <text>"` for each present option, A to D    |
//! | `answer`      | trimmed answer, else `""`                               |
//! | `explanation` | explanation, else [`NO_EXPLANATION`]                    |
//! | `score`       | score as integer, else [`DEFAULT_SCORE`]                |

use crate::error::ConvertError;
use crate::models::{Cell, QuestionRecord, DEFAULT_SCORE, NO_EXPLANATION};

use super::columns::{ColumnLayout, ID_COLUMN, OPTION_COLUMNS, SCORE_COLUMN};

/// Borrowed view of one data row, addressed through a [`ColumnLayout`].
#[derive(Debug, Clone, Copy)]
pub struct SourceRow<'a> {
    cells: &'a [Cell],
    layout: &'a ColumnLayout,
}

impl<'a> SourceRow<'a> {
    pub fn new(cells: &'a [Cell], layout: &'a ColumnLayout) -> Self {
        Self { cells, layout }
    }

    fn get(&self, index: usize) -> &'a Cell {
        static EMPTY: Cell = Cell::Empty;
        self.cells.get(index).unwrap_or(&EMPTY)
    }

    pub fn id(&self) -> &'a Cell {
        self.get(self.layout.id)
    }

    pub fn title(&self) -> &'a Cell {
        self.get(self.layout.title)
    }

    /// Option cells in A, B, C, D order.
    pub fn options(&self) -> [&'a Cell; 4] {
        self.layout.options.map(|i| self.get(i))
    }

    pub fn answer(&self) -> &'a Cell {
        self.get(self.layout.answer)
    }

    pub fn explanation(&self) -> &'a Cell {
        self.get(self.layout.explanation)
    }

    pub fn score(&self) -> &'a Cell {
        self.get(self.layout.score)
    }

    /// Whether every mapped column is empty.
    pub fn is_blank(&self) -> bool {
        self.layout.indices().all(|i| self.get(i).is_empty())
    }
}

/// Convert one row at 0-based `position`.
///
/// Row numbers in errors are `position + 1`, counting non-blank rows.
pub fn transform_row(row: &SourceRow<'_>, position: usize) -> Result<QuestionRecord, ConvertError> {
    let row_number = position + 1;

    let id = match row.id() {
        Cell::Empty => row_number as i64,
        cell => coerce_integer(cell, row_number, ID_COLUMN)?,
    };

    let question = match row.title() {
        Cell::Empty => return Err(ConvertError::MissingTitle { row: row_number }),
        cell => cell.to_string(),
    };

    let options = OPTION_COLUMNS
        .iter()
        .zip(row.options())
        .filter(|(_, cell)| !cell.is_empty())
        .map(|((letter, _), cell)| format!("{}. {}", letter, cell))
        .collect();

    let answer = match row.answer() {
        Cell::Empty => String::new(),
        cell => cell.to_string().trim().to_string(),
    };

    let explanation = match row.explanation() {
        Cell::Empty => NO_EXPLANATION.to_string(),
        cell => cell.to_string(),
    };

    let score = match row.score() {
        Cell::Empty => DEFAULT_SCORE,
        cell => coerce_integer(cell, row_number, SCORE_COLUMN)?,
    };

    Ok(QuestionRecord {
        id,
        question,
        options,
        answer,
        explanation,
        score,
    })
}

fn coerce_integer(cell: &Cell, row: usize, column: &str) -> Result<i64, ConvertError> {
    cell.as_integer()
        .ok_or_else(|| ConvertError::TypeCoercionFailure {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
}
