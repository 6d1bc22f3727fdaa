//! Macro file assembly and persistence.
//!
//! A macro file is a line-oriented text artifact staged under an install
//! root: a fixed machine-generated header, an optional commented preamble,
//! then one `%name value` line per macro. Files are written once per build
//! and never read back or merged.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::common::files::{join_under_root, write_lines_with_dirs};
use crate::macros::comments::format_comments;

/// Fixed header prepended to every generated macro file.
pub const MACRO_FILE_HEADER: [&str; 3] = [
    "# This macro file was dynamically generated by the macrogen image build tool",
    "# based on the configuration used at image creation time.",
    "",
];

/// Write a macro file under `install_root` at `relative_file_name`.
///
/// If `macros` is empty this is a no-op: no file and no directory is created,
/// so an all-defaults build leaves no empty scaffolding behind. Otherwise the
/// file holds the fixed header, the formatted `custom_comments` block (when
/// non-empty) followed by a blank separator line, then one line per macro
/// sorted ascending by name. Sorting makes the output independent of map
/// iteration order, so identical inputs always produce byte-identical files.
///
/// Parent directories are created as needed; errors carry the failing path.
pub fn add_macro_file(
    install_root: &Path,
    macros: &HashMap<String, String>,
    relative_file_name: &Path,
    custom_comments: Option<&[String]>,
) -> Result<()> {
    if macros.is_empty() {
        return Ok(());
    }

    let mut lines: Vec<String> = MACRO_FILE_HEADER.iter().map(|s| s.to_string()).collect();

    if let Some(comments) = custom_comments {
        if !comments.is_empty() {
            lines.extend(format_comments(comments));
            lines.push(String::new());
        }
    }

    // Explicit sort by name; HashMap iteration order is arbitrary.
    let mut pairs: Vec<(&String, &String)> = macros.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    for (name, value) in pairs {
        lines.push(format!("%{} {}", name, value));
    }

    let path = join_under_root(install_root, relative_file_name);
    write_lines_with_dirs(path, &lines)
}
