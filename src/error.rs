// Crate-wide error type for the pattern catalogue.
// Every invalid selector is a typed error; callers decide whether it is fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid logger type: '{0}'")]
    UnknownLoggerKind(String),

    #[error("File path is missing for FileLogger.")]
    MissingFilePath,

    #[error("Failed to write to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid logger settings: {0}")]
    InvalidSettings(#[from] toml::de::Error),

    #[error("Failed to render product: {0}")]
    Render(#[from] serde_json::Error),

    #[error("No prototype registered under '{0}'")]
    UnknownPrototype(String),

    #[error("Unknown platform: '{0}'")]
    UnknownPlatform(String),

    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    #[error("Unsupported audio type '{audio_type}' for {file_name}")]
    UnsupportedFormat {
        audio_type: String,
        file_name: String,
    },
}

impl PatternError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported_format(audio_type: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            audio_type: audio_type.into(),
            file_name: file_name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_path_display() {
        assert_eq!(
            PatternError::MissingFilePath.to_string(),
            "File path is missing for FileLogger."
        );
    }

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = PatternError::io("logs.txt", io::Error::new(io::ErrorKind::Other, "disk full"));
        let display = err.to_string();
        assert!(display.contains("logs.txt"));
        assert!(display.contains("disk full"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_payment_method_display() {
        let err = PatternError::InvalidPaymentMethod("bitcoin".into());
        assert_eq!(err.to_string(), "Invalid payment method: bitcoin");
    }
}
