//! Generate command - emits macro override files under the install root.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::macros::policy::{
    add_customization_macros, CUSTOMIZE_LOCALES_MACRO_FILE, DISABLE_DOCS_MACRO_FILE,
};

/// Execute the generate command.
pub fn cmd_generate(install_root: &Path, config: &Config) -> Result<()> {
    if !config.disable_rpm_docs && config.override_rpm_locales.is_empty() {
        println!("No RPM customizations requested; nothing to generate.");
        return Ok(());
    }

    println!("Generating macro files under {}...", install_root.display());

    add_customization_macros(
        install_root,
        config.disable_rpm_docs,
        &config.override_rpm_locales,
    )?;

    if config.disable_rpm_docs {
        println!("  Wrote {}", DISABLE_DOCS_MACRO_FILE);
    }
    if !config.override_rpm_locales.is_empty() {
        println!("  Wrote {}", CUSTOMIZE_LOCALES_MACRO_FILE);
    }

    Ok(())
}
