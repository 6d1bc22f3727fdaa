//! Macrogen - RPM macro override file generator.
//!
//! Stages package-manager macro files under an image install root so the
//! resulting image installs packages the way the build configuration asks
//! (no docs, trimmed locale set).

mod commands;
mod common;
mod config;
mod macros;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::Config;

#[derive(Parser)]
#[command(name = "macrogen")]
#[command(about = "RPM macro override file generator")]
#[command(
    after_help = "QUICK START:\n  macrogen generate --install-root staging --disable-rpm-docs\n  macrogen show config"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate macro override files under the install root
    Generate {
        /// Install root the macro files are staged under
        #[arg(long)]
        install_root: PathBuf,

        /// Image configuration JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress documentation installation (%_excludedocs 1)
        #[arg(long)]
        disable_rpm_docs: bool,

        /// Locale list for %_install_langs (e.g. "en:de:fr" or "NONE")
        #[arg(long)]
        override_rpm_locales: Option<String>,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show effective configuration
    Config {
        /// Image configuration JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show well-known macro file paths
    Paths,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Generate {
            install_root,
            config,
            disable_rpm_docs,
            override_rpm_locales,
        } => {
            let mut config = Config::load(config.as_deref())?;
            // Flags override both file and environment
            if disable_rpm_docs {
                config.disable_rpm_docs = true;
            }
            if let Some(locales) = override_rpm_locales {
                config.override_rpm_locales = locales;
            }
            commands::cmd_generate(&install_root, &config)?;
        }

        Commands::Show { what } => {
            let (target, config) = match what {
                ShowTarget::Config { config } => (
                    commands::show::ShowTarget::Config,
                    Config::load(config.as_deref())?,
                ),
                ShowTarget::Paths => (commands::show::ShowTarget::Paths, Config::default()),
            };
            commands::cmd_show(target, &config)?;
        }
    }

    Ok(())
}
