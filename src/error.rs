//! Error types for orgcal

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for orgcal
#[derive(Debug, Error)]
pub enum OrgcalError {
    #[error("Malformed date: {0}")]
    MalformedDate(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Malformed clock line: {0}")]
    MalformedClockLine(String),

    #[error("Unexpected heading at line {line}: {text}")]
    UnexpectedHeadingDepth { line: usize, text: String },

    #[error("Document changed after re-rendering: {0}")]
    RoundTripMismatch(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<serde_json::Error> for OrgcalError {
    fn from(err: serde_json::Error) -> Self {
        OrgcalError::MalformedRecord(format!("invalid JSON: {}", err))
    }
}

impl OrgcalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            OrgcalError::MalformedRecord(_) => 2,
            OrgcalError::MalformedDate(_) => 3,
            OrgcalError::MalformedClockLine(_) | OrgcalError::UnexpectedHeadingDepth { .. } => 4,
            OrgcalError::RoundTripMismatch(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            OrgcalError::MalformedRecord(msg) => {
                format!(
                    "Malformed record: {}\n\n\
                    Suggestions:\n\
                    • Each record needs date0, title0, time0, time1 and attendees0\n\
                    • Times are four digits without a separator (e.g., \"0930\")\n\
                    • An input file holds one record object or an array of them",
                    msg
                )
            }
            OrgcalError::MalformedDate(date) => {
                format!(
                    "Malformed date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: \"date0\": \"2024-01-15\"",
                    date
                )
            }
            OrgcalError::MalformedClockLine(_) | OrgcalError::UnexpectedHeadingDepth { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Only documents written by 'orgcal build' or 'orgcal append' can be loaded\n\
                    • Run 'orgcal check <file>' to locate the offending line",
                    self
                )
            }
            OrgcalError::RoundTripMismatch(path) => {
                format!(
                    "{} was loaded but does not re-render identically.\n\n\
                    Suggestions:\n\
                    • The file may have been edited by hand\n\
                    • Run 'orgcal append {} -o normalized.org' to rewrite it in canonical form",
                    path.display(),
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using OrgcalError
pub type Result<T> = std::result::Result<T, OrgcalError>;
