//! File access with path-carrying errors.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TexcvError};

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TexcvError::io(path, e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// A crash mid-write leaves any existing file untouched.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TexcvError::io(parent, e))?;
    }

    let temp_file = temp_path_for(path);

    {
        let mut file = File::create(&temp_file).map_err(|e| TexcvError::io(&temp_file, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| TexcvError::io(&temp_file, e))?;
        file.sync_all().map_err(|e| TexcvError::io(&temp_file, e))?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(|e| TexcvError::io(path, e))?;
    }

    fs::rename(&temp_file, path).map_err(|e| TexcvError::io(path, e))?;

    Ok(())
}
