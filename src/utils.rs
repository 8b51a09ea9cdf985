//! Utility functions and helpers

use crate::error::{HistoryError, Result};
use std::path::{Path, PathBuf};

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand a leading tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let rest = match path.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
            _ => return Ok(PathBuf::from(path)),
        };
        let home_dir = dirs::home_dir()
            .ok_or_else(|| HistoryError::Config("Cannot determine home directory".to_string()))?;
        Ok(home_dir.join(rest.trim_start_matches(['/', '\\'])))
    }

    /// Check that `path` is an existing directory or can become one
    pub fn check_output_dir(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(HistoryError::Config(format!(
                "Output path is not a directory: {:?}",
                path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
