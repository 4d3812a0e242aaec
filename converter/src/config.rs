//! Conversion configuration.
//!
//! Paths come from three layers, highest precedence first:
//!
//! 1. command-line arguments
//! 2. environment (`QUIZBANK_INPUT`, `QUIZBANK_OUTPUT`, `QUIZBANK_SHEET`,
//!    `.env` included)
//! 3. a JSON config file passed with `--config`
//!
//! There are no default paths: an unset input or output is an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const ENV_INPUT: &str = "QUIZBANK_INPUT";
pub const ENV_OUTPUT: &str = "QUIZBANK_OUTPUT";
pub const ENV_SHEET: &str = "QUIZBANK_SHEET";

/// Resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Workbook or CSV file to read.
    pub input_path: PathBuf,
    /// JSON file to write.
    pub output_path: PathBuf,
    /// Worksheet to read (first sheet when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            sheet: None,
        }
    }
}

/// One partially filled configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub sheet: Option<String>,
}

impl ConfigLayer {
    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the `QUIZBANK_*` variables, after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a layer from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            input_path: get(ENV_INPUT).map(PathBuf::from),
            output_path: get(ENV_OUTPUT).map(PathBuf::from),
            sheet: get(ENV_SHEET),
        }
    }

    /// Fill unset fields from a lower-precedence layer.
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            input_path: self.input_path.or(lower.input_path),
            output_path: self.output_path.or(lower.output_path),
            sheet: self.sheet.or(lower.sheet),
        }
    }

    /// Input path only, for commands that write nothing.
    pub fn require_input(&self) -> Result<PathBuf, ConfigError> {
        self.input_path.clone().ok_or(ConfigError::MissingInput)
    }

    /// Finish into a full configuration, failing on missing paths.
    pub fn build(self) -> Result<ConvertConfig, ConfigError> {
        Ok(ConvertConfig {
            input_path: self.input_path.ok_or(ConfigError::MissingInput)?,
            output_path: self.output_path.ok_or(ConfigError::MissingOutput)?,
            sheet: self.sheet,
        })
    }
}
