// Pattern: Factory
// A logger factory over a closed set of logger kinds. The kind can come from
// code, from a string, or from a TOML settings snippet.

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// Loggers
// =============================================================================

pub trait Logger {
    fn log(&self, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn format_line(message: &str) -> String {
        format!("[Console] {message}")
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) -> Result<()> {
        println!("{}", Self::format_line(message));
        Ok(())
    }
}

/// Append-only line writer. Creates the file on first use, never truncates.
#[derive(Debug, Clone)]
pub struct FileLogger {
    file_path: PathBuf,
}

impl FileLogger {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .map_err(|err| PatternError::io(&self.file_path, err))?;

        writeln!(file, "[File] {message}").map_err(|err| PatternError::io(&self.file_path, err))?;
        debug!(path = %self.file_path.display(), "appended log line");
        Ok(())
    }
}

// =============================================================================
// Factory
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    Console,
    File,
}

impl FromStr for LoggerKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(LoggerKind::Console),
            "file" => Ok(LoggerKind::File),
            _ => Err(PatternError::UnknownLoggerKind(s.to_string())),
        }
    }
}

/// Declarative logger description, e.g.
///
/// ```toml
/// kind = "file"
/// file_path = "logs.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerSettings {
    pub kind: LoggerKind,
    #[serde(default)]
    pub file_path: Option<PathBuf>,
}

impl LoggerSettings {
    pub fn console() -> Self {
        Self {
            kind: LoggerKind::Console,
            file_path: None,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: LoggerKind::File,
            file_path: Some(path.into()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

pub fn create_logger(settings: &LoggerSettings) -> Result<Box<dyn Logger>> {
    match settings.kind {
        LoggerKind::Console => Ok(Box::new(ConsoleLogger)),
        LoggerKind::File => {
            let path = settings
                .file_path
                .as_ref()
                .ok_or(PatternError::MissingFilePath)?;
            Ok(Box::new(FileLogger::new(path)))
        }
    }
}

pub fn run_demo() -> Result<()> {
    let console_logger = create_logger(&LoggerSettings::console())?;
    console_logger.log("This is a console log.")?;

    let settings = LoggerSettings::from_toml_str("kind = \"file\"\nfile_path = \"logs.txt\"")?;
    let file_logger = create_logger(&settings)?;
    file_logger.log("This is a file log.")?;
    println!("Appended a line to logs.txt");

    if let Err(err) = create_logger(&LoggerSettings {
        kind: LoggerKind::File,
        file_path: None,
    }) {
        crate::console::diagnostic(format!("Construction refused: {err}"));
    }
    Ok(())
}
