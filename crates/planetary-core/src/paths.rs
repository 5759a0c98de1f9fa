//! Path resolution for planetary data directories.
//!
//! Provides the canonical location of the `SQLite` database file.
//! No interactive/terminal I/O here - adapters handle user prompts.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        reason: String,
    },
}

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `PLANETARY_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g. `~/.local/share/planetary`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var("PLANETARY_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    dirs::data_dir()
        .map(|base| base.join("planetary"))
        .ok_or(PathError::NoDataDir)
}

/// Get the path to the planetary database file.
///
/// Honors the `PLANETARY_DB` override, otherwise returns `planetary.db`
/// in the data root. The containing directory is created if missing.
pub fn database_path() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var("PLANETARY_DB") {
        return Ok(PathBuf::from(path));
    }

    let root = data_root()?;
    fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
        path: root.clone(),
        reason: e.to_string(),
    })?;

    Ok(root.join("planetary.db"))
}
