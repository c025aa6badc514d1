//! Utility functions for error handling
//!
//! File helpers that attach the path and the reason the file is needed to IO failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ConvertError, Result};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.is_file() {
        return Err(ConvertError::io(
            format!("File not found, needed for: {purpose}"),
            path,
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        ConvertError::io(context, path, e)
    })
}

/// Create (or truncate) an output file with rich error information
///
/// # Arguments
/// * `path` - The path of the file to create
/// * `purpose` - What the file will hold (for error context)
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check directory permissions".to_string()
            }
            io::ErrorKind::NotFound => "Parent directory does not exist".to_string(),
            _ => format!("Failed to create file for: {purpose}"),
        };
        ConvertError::io(context, path, e)
    })
}
