//! Configuration for the personography converter.

use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::error::{ConvertError, Result};

/// Default input file name
pub const DEFAULT_INPUT: &str = "HAMpersons.xml";

/// Default output filename stub
pub const DEFAULT_OUTPUT_STUB: &str = "output";

/// Configuration for the converter
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Separator for multi-valued cells (alternate names, notes, URLs)
    pub multi_value_delimiter: char,
    /// Replacement for line breaks inside note text
    pub line_break_marker: String,
    /// Quote every CSV field rather than only those that need it
    pub quote_all: bool,
    /// Display a progress bar while walking the person list
    pub show_progress: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            multi_value_delimiter: '$',
            line_break_marker: "<br/>".to_string(),
            quote_all: true,
            show_progress: true,
        }
    }
}

impl ConverterConfig {
    /// Set the multi-value delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.multi_value_delimiter = delimiter;
        self
    }

    /// Enable or disable quoting of every field
    #[must_use]
    pub fn with_quote_all(mut self, quote_all: bool) -> Self {
        self.quote_all = quote_all;
        self
    }

    /// Enable or disable the progress bar
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check the configuration against the output formats
    ///
    /// The delimiter may not be `|`, which the date range token uses internally,
    /// nor a character that is part of the CSV dialect.
    pub fn validate(&self) -> Result<()> {
        match self.multi_value_delimiter {
            '|' => Err(ConvertError::config(
                "multi-value delimiter '|' collides with the date range format",
            )),
            c @ (',' | '"' | '\n' | '\r') => Err(ConvertError::config(format!(
                "multi-value delimiter {c:?} collides with the CSV dialect"
            ))),
            _ => Ok(()),
        }
    }

    /// Join values with the multi-value delimiter
    pub(crate) fn join<I, S>(&self, values: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buf = [0u8; 4];
        let separator = self.multi_value_delimiter.encode_utf8(&mut buf);
        values
            .into_iter()
            .map(|value| value.as_ref().to_owned())
            .join(separator)
    }
}

/// Paths of the two files produced by a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Agents table
    pub agents: PathBuf,
    /// Relationships table
    pub relationships: PathBuf,
}

impl OutputPaths {
    /// Derive both output paths from a filename stub
    ///
    /// `out/ham` becomes `out/ham_agents.csv` and `out/ham_relationships.csv`.
    #[must_use]
    pub fn from_stub(stub: impl AsRef<Path>) -> Self {
        let stub = stub.as_ref().as_os_str().to_string_lossy();
        Self {
            agents: PathBuf::from(format!("{stub}_agents.csv")),
            relationships: PathBuf::from(format!("{stub}_relationships.csv")),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::from_stub(DEFAULT_OUTPUT_STUB)
    }
}
