use quizbank::{convert, inspect, load_table, ConvertConfig, ConvertError, QuestionRecord, SheetError};
use std::fs;
use std::path::{Path, PathBuf};
use umya_spreadsheet::structs::{Spreadsheet, Worksheet};

const HEADER: [&str; 9] = [
    "单选题型", "题目标题", "选项A", "选项B", "选项C", "选项D", "正确答案", "答案解析", "分值",
];

enum V {
    T(&'static str),
    N(f64),
    E,
}

fn fill(sheet: &mut Worksheet, rows: &[Vec<V>]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let coord = (c as u32 + 1, r as u32 + 1);
            match value {
                V::T(s) => {
                    sheet.get_cell_mut(coord).set_value_string(*s);
                }
                V::N(n) => {
                    sheet.get_cell_mut(coord).set_value_number(*n);
                }
                V::E => {}
            }
        }
    }
}

fn header_row() -> Vec<V> {
    HEADER.iter().map(|&h| V::T(h)).collect()
}

fn question_rows() -> Vec<Vec<V>> {
    use V::{E, N, T};
    vec![
        header_row(),
        vec![E, T("2+2=?"), N(3.0), N(4.0), E, E, T(" B "), E, N(2.0)],
        vec![],
        vec![N(7.0), T("只有标题"), E, E, E, E, E, E, E],
        vec![E, T("第三题"), T("甲"), E, T("丙"), E, T("C"), T("丙是答案"), E],
    ]
}

fn save(book: &Spreadsheet, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    umya_spreadsheet::writer::xlsx::write(book, &path).unwrap();
    path
}

fn question_workbook(dir: &Path) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    fill(book.get_active_sheet_mut(), &question_rows());
    save(&book, dir, "题库.xlsx")
}

#[test]
fn converts_first_sheet_of_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let input = question_workbook(dir.path());
    let output = dir.path().join("questions.json");

    let summary = convert(&ConvertConfig::new(&input, &output)).unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.skipped_blank, 1);
    assert_eq!(summary.sheet, "Sheet1");

    let records: Vec<QuestionRecord> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].options, vec!["A. 3", "B. 4"]);
    assert_eq!(records[0].answer, "B");
    assert_eq!(records[0].score, 2);

    assert_eq!(records[1].id, 7);
    assert!(records[1].options.is_empty());
    assert_eq!(records[1].answer, "");
    assert_eq!(records[1].score, 1);

    // The blank row between them does not take a position
    assert_eq!(records[2].id, 3);
    assert_eq!(records[2].options, vec!["A. 甲", "C. 丙"]);
    assert_eq!(records[2].explanation, "丙是答案");
}

#[test]
fn blank_row_then_title_only_question_gets_next_id() {
    use V::{E, T};
    let dir = tempfile::tempdir().unwrap();
    let mut book = umya_spreadsheet::new_file();
    fill(
        book.get_active_sheet_mut(),
        &[
            header_row(),
            vec![E, T("第一题"), T("甲"), T("乙"), E, E, T("A"), E, E],
            vec![],
            vec![E, T("第二题")],
        ],
    );
    let input = save(&book, dir.path(), "bank.xlsx");
    let output = dir.path().join("questions.json");

    convert(&ConvertConfig::new(&input, &output)).unwrap();

    let records: Vec<QuestionRecord> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn named_sheet_is_used_and_first_sheet_schema_is_checked() {
    use V::T;
    let dir = tempfile::tempdir().unwrap();
    let mut book = umya_spreadsheet::new_file();
    fill(
        book.get_active_sheet_mut(),
        &[vec![T("name"), T("age")], vec![T("Alice"), T("30")]],
    );
    fill(book.new_sheet("题库").unwrap(), &question_rows());
    let input = save(&book, dir.path(), "two-sheets.xlsx");
    let output = dir.path().join("questions.json");

    // Default is the first sheet, which has the wrong columns
    let err = convert(&ConvertConfig::new(&input, &output)).unwrap_err();
    assert!(matches!(err, ConvertError::SchemaMismatch { ref missing } if missing.len() == 9));
    assert!(!output.exists());

    let mut config = ConvertConfig::new(&input, &output);
    config.sheet = Some("题库".to_string());
    let summary = convert(&config).unwrap();
    assert_eq!(summary.sheet, "题库");
    assert_eq!(summary.count, 3);
    assert!(output.exists());
}

#[test]
fn unknown_sheet_lists_available_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let input = question_workbook(dir.path());

    let err = load_table(&input, Some("第二章")).unwrap_err();
    match err {
        SheetError::SheetNotFound { name, available } => {
            assert_eq!(name, "第二章");
            assert_eq!(available, vec!["Sheet1"]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let mut config = ConvertConfig::new(&input, dir.path().join("questions.json"));
    config.sheet = Some("第二章".to_string());
    let err = convert(&config).unwrap_err();
    assert!(matches!(err, ConvertError::Load(SheetError::SheetNotFound { .. })));
}

#[test]
fn empty_sheet_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let book = umya_spreadsheet::new_file();
    let input = save(&book, dir.path(), "empty.xlsx");

    let err = load_table(&input, None).unwrap_err();
    assert!(matches!(err, SheetError::EmptySheet(ref name) if name == "Sheet1"));
}

#[test]
fn headers_are_trimmed_and_numeric_headers_become_text() {
    use V::{N, T};
    let dir = tempfile::tempdir().unwrap();
    let mut book = umya_spreadsheet::new_file();
    fill(
        book.get_active_sheet_mut(),
        &[
            vec![T(" 题目标题 "), N(2024.0), T("分值")],
            vec![T("一"), N(1.0), N(2.0)],
        ],
    );
    let input = save(&book, dir.path(), "headers.xlsx");

    let inspection = inspect(&input, None, 3).unwrap();
    assert_eq!(inspection.columns, vec!["题目标题", "2024", "分值"]);
    assert_eq!(inspection.row_count, 1);
    assert_eq!(inspection.sample["分值"]["0"], 2.0);
}
