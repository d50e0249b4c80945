use anyhow::Result;
use clap::Parser;

use super::HookTypeArgs;
use crate::cli::Output;
use crate::config::Context;
use crate::hooks::{HookManager, HookType};

#[derive(Parser, Debug)]
#[command(name = "wre-commit uninstall", about = "Remove wre-commit git hook(s)")]
pub struct UninstallArgs {
    #[command(flatten)]
    pub hooks: HookTypeArgs,
}

/// `opts` starts with the `uninstall` command itself
pub async fn execute(opts: &[String], context: &Context, output: &Output) -> Result<i32> {
    let args = UninstallArgs::parse_from(opts);
    let hooks = HookType::parse_list(&args.hooks.hook_types)?;

    let manager = HookManager::discover(&context.cwd)?;
    manager.uninstall(&hooks, output)?;

    Ok(0)
}
