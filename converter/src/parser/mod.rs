//! Tabular source loading: spreadsheet workbooks and CSV files.
//!
//! Every format ends up as a [`Table`]: a header row plus data rows of
//! [`Cell`]s. No quiz-specific logic here.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::{SheetError, SheetResult};
use crate::models::Cell;

/// Extensions opened through calamine.
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Extensions parsed as delimited text.
const TEXT_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

/// An in-memory table: one header row and the data rows below it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Worksheet name (file stem for CSV input).
    pub sheet: String,
    /// Header names, trimmed.
    pub headers: Vec<String>,
    /// Data rows, in source order.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(sheet: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            sheet: sheet.into(),
            headers,
            rows,
        }
    }

    /// Cell at `(row, column)`; short rows read as empty.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Load the first (or the named) sheet of a workbook, or a CSV file.
///
/// The format is chosen from the file extension.
pub fn load_table<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> SheetResult<Table> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SheetError::FileNotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        load_workbook(path, sheet)
    } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("csv");
        let bytes = std::fs::read(path)?;
        parse_bytes_auto(&bytes, name)
    } else {
        Err(SheetError::UnsupportedFormat(path.to_path_buf()))
    }
}

// =============================================================================
// Workbooks
// =============================================================================

/// Read one worksheet of an Excel/OpenDocument workbook.
pub fn load_workbook(path: &Path, sheet: Option<&str>) -> SheetResult<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names().to_vec();

    let name = match sheet {
        Some(wanted) => available
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| SheetError::SheetNotFound {
                name: wanted.to_string(),
                available: available.clone(),
            })?,
        None => available
            .first()
            .cloned()
            .ok_or_else(|| SheetError::EmptySheet(path.display().to_string()))?,
    };

    let range = workbook.worksheet_range(&name)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| SheetError::EmptySheet(name.clone()))?
        .iter()
        .map(|c| data_to_cell(c).to_string().trim().to_string())
        .collect();

    let records = rows
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect();

    Ok(Table::new(name, headers, records))
}

/// Map a calamine cell to a [`Cell`].
pub fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#ERR:{:?}", e)),
    }
}

// =============================================================================
// Delimited text
// =============================================================================

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "gb2312" | "gbk" | "gb18030" => "gb18030".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// Valid UTF-8 always wins; unknown labels fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    match encoding_rs::Encoding::for_label(encoding.as_bytes()) {
        Some(enc) => enc.decode(bytes).0.into_owned(),
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = b',';
    let mut best_count = 0;

    for sep in [b',', b';', b'\t', b'|'] {
        let count = first_line.bytes().filter(|&b| b == sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8], name: &str) -> SheetResult<Table> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);
    parse_csv_str(&content, delimiter, name)
}

/// Parse CSV text with an explicit delimiter.
///
/// Empty fields become [`Cell::Empty`]; everything else is kept as text.
pub fn parse_csv_str(content: &str, delimiter: u8, name: &str) -> SheetResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SheetError::EmptySheet(name.to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Table::new(name, headers, rows))
}
