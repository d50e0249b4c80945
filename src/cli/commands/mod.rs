//! Command implementations for wre-commit
//!
//! `help` and `version` print the wrapper's part before pre-commit adds its
//! own; `install` and `uninstall` manage git hooks; `run` covers everything
//! handed to pre-commit.

use clap::Args;

pub mod help;
pub mod install;
pub mod run;
pub mod uninstall;
pub mod version;

/// Hook selection shared by `install` and `uninstall`
#[derive(Args, Debug, Clone, Default)]
pub struct HookTypeArgs {
    /// Hook types, comma separated or repeated (default: pre-commit)
    #[arg(short = 't', long = "hook-type", value_name = "TYPES", value_delimiter = ',')]
    pub hook_types: Vec<String>,
}
