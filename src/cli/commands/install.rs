use anyhow::Result;
use clap::Parser;

use super::HookTypeArgs;
use crate::cli::Output;
use crate::config::{Context, Settings};
use crate::hooks::{HookManager, HookType};
use crate::shared::process;

#[derive(Parser, Debug)]
#[command(name = "wre-commit install", about = "Install wre-commit as git hook(s)")]
pub struct InstallArgs {
    #[command(flatten)]
    pub hooks: HookTypeArgs,
}

/// `opts` starts with the `install` command itself
pub async fn execute(
    opts: &[String],
    context: &Context,
    settings: &Settings,
    output: &Output,
) -> Result<i32> {
    let args = InstallArgs::parse_from(opts);
    let hooks = HookType::parse_list(&args.hooks.hook_types)?;

    let manager = HookManager::discover(&context.cwd)?;
    let executable = process::which(&settings.executable)?;
    manager.install(&hooks, &executable, output)?;

    Ok(0)
}
