//! Pipeline progress logging.
//!
//! Log entries are written to stderr so that stdout only carries command
//! results. A global [`Logger`] can be silenced with [`set_quiet`].

use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting level for sub-steps
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render as one output line.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Writes log entries to stderr
pub struct Logger {
    quiet: AtomicBool,
}

impl Logger {
    pub fn new() -> Self {
        Self { quiet: AtomicBool::new(false) }
    }

    /// Whether an entry passes the quiet filter. Warnings always do.
    pub fn enabled(&self, level: LogLevel) -> bool {
        !self.quiet.load(Ordering::Relaxed) || level == LogLevel::Warning
    }

    pub fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        let _ = writeln!(std::io::stderr().lock(), "{}", entry.render());
    }

    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Silence info and success entries.
pub fn set_quiet(quiet: bool) {
    LOGGER.set_quiet(quiet);
}

pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::warning(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::info(msg).with_indent(indent));
}
