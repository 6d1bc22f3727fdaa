//! Utilities for file operations with automatic parent directory creation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Join a path beneath a root directory.
///
/// The well-known macro file paths are absolute (`/usr/lib/rpm/...`), but
/// `Path::join` would discard the root when handed an absolute path. Strip
/// the leading separator so the result always stays under `root`.
pub fn join_under_root(root: &Path, relative: &Path) -> PathBuf {
    match relative.strip_prefix("/") {
        Ok(stripped) => root.join(stripped),
        Err(_) => root.join(relative),
    }
}

/// Write a line-oriented text file, creating parent directories as needed.
///
/// Each line is terminated with a newline. The file is created or truncated;
/// errors carry the path that failed.
pub fn write_lines_with_dirs<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
