//! Error handling for the personography converter.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the converter
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Error opening, reading or writing a file
    #[error("IO error: {message}{}", path_suffix(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Error writing a CSV row
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A person element carries no `xml:id`
    #[error("Person #{position} in the person list has no xml:id")]
    MissingIdentifier { position: usize },

    /// Invalid converter configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl ConvertError {
    /// Wrap an IO error with a message and the path it relates to
    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<io::Error> for ConvertError {
    fn from(error: io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
            source: error,
        }
    }
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;
