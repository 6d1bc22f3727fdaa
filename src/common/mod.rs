//! Shared utilities across macrogen modules.

pub mod files;

pub use files::{join_under_root, write_lines_with_dirs};
