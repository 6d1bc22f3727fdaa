//! Show command - displays information.

use anyhow::Result;

use crate::config::Config;
use crate::macros::policy::{CUSTOMIZE_LOCALES_MACRO_FILE, DISABLE_DOCS_MACRO_FILE};

/// Show target for the show command.
pub enum ShowTarget {
    /// Show effective configuration
    Config,
    /// Show well-known macro file paths
    Paths,
}

/// Execute the show command.
pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Paths => {
            println!("Macro file paths (relative to install root):");
            println!("  disable docs:      {}", DISABLE_DOCS_MACRO_FILE);
            println!("  customize locales: {}", CUSTOMIZE_LOCALES_MACRO_FILE);
        }
    }
    Ok(())
}
