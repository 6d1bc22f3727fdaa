//! Customization policy: which macro files a build configuration requests.

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::macros::writer::add_macro_file;

/// Macro file that suppresses documentation installation.
pub const DISABLE_DOCS_MACRO_FILE: &str =
    "/usr/lib/rpm/macros.d/macros.installercustomizations_disable_docs";

/// Macro file that overrides the set of installed locales.
pub const CUSTOMIZE_LOCALES_MACRO_FILE: &str =
    "/usr/lib/rpm/macros.d/macros.installercustomizations_customize_locales";

/// Emit the macro files requested by the build configuration.
///
/// `disable_rpm_docs` requests `%_excludedocs 1`; a non-empty
/// `override_rpm_locales` requests `%_install_langs <value>`. When neither is
/// set, nothing is touched on disk - not even the `macros.d` directory. The
/// docs file is attempted first and a failure there stops the locale write,
/// so error reporting is deterministic.
pub fn add_customization_macros(
    install_root: &Path,
    disable_rpm_docs: bool,
    override_rpm_locales: &str,
) -> Result<()> {
    if disable_rpm_docs {
        let macros = HashMap::from([("_excludedocs".to_string(), "1".to_string())]);
        add_macro_file(
            install_root,
            &macros,
            Path::new(DISABLE_DOCS_MACRO_FILE),
            None,
        )?;
    }

    if !override_rpm_locales.is_empty() {
        let macros = HashMap::from([(
            "_install_langs".to_string(),
            override_rpm_locales.to_string(),
        )]);
        add_macro_file(
            install_root,
            &macros,
            Path::new(CUSTOMIZE_LOCALES_MACRO_FILE),
            None,
        )?;
    }

    Ok(())
}
