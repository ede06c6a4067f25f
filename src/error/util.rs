//! Utility functions for error handling
//!
//! Helpers that turn filesystem conditions into the crate's error kinds
//! before any parsing starts.

use std::fs;
use std::path::Path;

use crate::error::{DxCorrectionError, Result};

/// Open an input file, reporting a missing path as `InputNotFound`
///
/// # Arguments
/// * `path` - The path to the file to open
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(DxCorrectionError::InputNotFound(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(DxCorrectionError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Path is not a file: {}", path.display()),
        )));
    }

    Ok(fs::File::open(path)?)
}

/// Create the parent directory of an output path if it is missing
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
