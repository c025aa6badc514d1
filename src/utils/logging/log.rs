//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::path::Path;

use crate::convert::ConversionSummary;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} items to {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        );
    } else {
        log::info!("Successfully {} {} items to {}", operation, items, path.display());
    }
}

/// Log an operation warning with consistent format
pub fn log_warning(message: &str) {
    log::warn!("{message}");
}

/// Log the outcome of a conversion
pub fn log_summary(summary: &ConversionSummary) {
    log::info!(
        "Converted {} persons and {} relationships",
        summary.persons,
        summary.relationships
    );

    let relations = &summary.relations;
    if relations.skipped() > 0 || relations.suppressed_inverses > 0 {
        log::info!(
            "Relationship declarations: {} examined, {} unnamed, {} placeholders, {} unrecognized, {} inverse pairs suppressed",
            relations.declarations,
            relations.unnamed,
            relations.placeholders,
            relations.unrecognized,
            relations.suppressed_inverses
        );
    }

    if summary.duplicate_ids > 0 {
        log::warn!("{} persons reuse an earlier xml:id", summary.duplicate_ids);
    }
}
