//! Log lines shared by the loader, the writers and the command line tool

use std::path::Path;
use std::time::Duration;

use crate::algorithm::InvariantViolation;

/// Log the start of a file operation
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log a finished table read or write
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "read" or "wrote"
/// * `path` - File that was read or written
/// * `rows` - Number of subject rows
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    rows: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {operation} {rows} rows for {} in {duration:?}",
            path.display()
        ),
        None => log::info!("Successfully {operation} {rows} rows for {}", path.display()),
    }
}

/// Log a warning, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Report the outcome of a consistency check
///
/// Only the first `limit` violations are listed; the rest are counted.
pub fn log_violations(violations: &[InvariantViolation], limit: usize) {
    if violations.is_empty() {
        log::info!("No remaining inconsistencies found");
        return;
    }
    log::warn!("{} remaining inconsistencies", violations.len());
    for violation in violations.iter().take(limit) {
        log::warn!("{violation}");
    }
    if violations.len() > limit {
        log::warn!("... and {} more", violations.len() - limit);
    }
}
