//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `generate` - Emit macro override files
//! - `show` - Display information

pub mod generate;
pub mod show;

pub use generate::cmd_generate;
pub use show::cmd_show;
