use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::path::Path;

/// Fail unless the given path is an existing directory
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::DirectoryNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the current platform identifier as a string
pub fn platform_string() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}
