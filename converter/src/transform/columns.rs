//! Fixed column layout of a question bank sheet.

use crate::error::ConvertError;
use crate::parser::Table;

/// Identifier column; in practice holds a question number or type marker.
pub const ID_COLUMN: &str = "单选题型";
pub const TITLE_COLUMN: &str = "题目标题";
/// Option columns, in output order.
pub const OPTION_COLUMNS: [(char, &str); 4] =
    [('A', "选项A"), ('B', "选项B"), ('C', "选项C"), ('D', "选项D")];
pub const ANSWER_COLUMN: &str = "正确答案";
pub const EXPLANATION_COLUMN: &str = "答案解析";
pub const SCORE_COLUMN: &str = "分值";

/// Every expected column, in the order missing columns are reported.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    ID_COLUMN,
    TITLE_COLUMN,
    OPTION_COLUMNS[0].1,
    OPTION_COLUMNS[1].1,
    OPTION_COLUMNS[2].1,
    OPTION_COLUMNS[3].1,
    ANSWER_COLUMN,
    EXPLANATION_COLUMN,
    SCORE_COLUMN,
];

/// Header indices of the expected columns in one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub id: usize,
    pub title: usize,
    pub options: [usize; 4],
    pub answer: usize,
    pub explanation: usize,
    pub score: usize,
}

impl ColumnLayout {
    /// Locate every expected column in `headers`.
    ///
    /// Fails with [`ConvertError::SchemaMismatch`] listing all absent columns.
    pub fn resolve(headers: &[String]) -> Result<Self, ConvertError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConvertError::SchemaMismatch { missing });
        }

        // All present at this point
        let index = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            id: index(ID_COLUMN),
            title: index(TITLE_COLUMN),
            options: OPTION_COLUMNS.map(|(_, name)| index(name)),
            answer: index(ANSWER_COLUMN),
            explanation: index(EXPLANATION_COLUMN),
            score: index(SCORE_COLUMN),
        })
    }

    /// Resolve against a loaded table's header row.
    pub fn for_table(table: &Table) -> Result<Self, ConvertError> {
        Self::resolve(&table.headers)
    }

    /// All mapped indices.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        [self.id, self.title]
            .into_iter()
            .chain(self.options)
            .chain([self.answer, self.explanation, self.score])
    }
}
