//! JSON output: pretty-printed with 2-space indentation, non-ASCII
//! characters written literally, and an all-or-nothing file write.

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Serialize `value` as indented JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ConvertError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Write `content` to `path` through a sibling temporary file and a rename,
/// so a failed write never leaves a truncated output behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), ConvertError> {
    let tmp = temp_path(path);
    let failure = |source| ConvertError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let result = fs::File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&tmp, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(failure(e));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
