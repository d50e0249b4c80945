//! Command-line interface for wre-commit
//!
//! Apart from `install` and `uninstall`, every argument belongs to
//! pre-commit, so the command line is not parsed up front. It is split into
//! options and the `--` tail, peeked at for the few things wre-commit cares
//! about, and handed on unchanged.

use anyhow::Result;
use std::path::Path;

pub mod commands;
mod output;

pub use output::Output;

use crate::config::{Context, Settings};

/// Presence of this variable turns on debug logging
pub const DEBUG_ENV: &str = "WRE_COMMIT_DEBUG";

/// The command line as wre-commit sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name; the hook type when git runs us through a hook symlink
    pub name: String,
    /// Arguments before the first `--`
    pub opts: Vec<String>,
    /// The first `--` and everything after it
    pub args: Vec<String>,
}

impl Invocation {
    pub fn from_env() -> Self {
        Self::from_args(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    pub fn from_args<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut argv = argv.into_iter();
        let name = argv
            .next()
            .and_then(|program| {
                Path::new(&program)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| crate::NAME.to_string());

        let mut opts: Vec<String> = argv.collect();
        let args = match opts.iter().position(|opt| opt == "--") {
            Some(index) => opts.split_off(index),
            None => Vec::new(),
        };

        Self { name, opts, args }
    }

    /// First option, which pre-commit treats as its command
    pub fn command(&self) -> Option<&str> {
        self.opts.first().map(String::as_str)
    }

    /// Value of the first of `keys` given as `KEY VALUE` or `KEY=VALUE`
    pub fn option(&self, keys: &[&str]) -> Option<&str> {
        let last = self.opts.len().saturating_sub(1);
        for (i, opt) in self.opts.iter().enumerate() {
            if keys.contains(&opt.as_str()) && i < last {
                return Some(&self.opts[i + 1]);
            }
            if let Some((key, value)) = opt.split_once('=') {
                if keys.contains(&key) {
                    return Some(value);
                }
            }
        }
        None
    }

    /// Help was asked for somewhere on the command line
    pub fn wants_help(&self) -> bool {
        self.opts.iter().any(|opt| opt == "-h" || opt == "--help")
    }
}

/// Run wre-commit for `invocation` in the current process environment
pub async fn run(invocation: Invocation) -> Result<i32> {
    let context = Context::from_env()?;
    let settings = Settings::load()?;
    let output = Output;

    dispatch(invocation, &context, &settings, &output).await
}

/// Route to the wrapper's own commands or to pre-commit; returns the exit code
pub async fn dispatch(
    invocation: Invocation,
    context: &Context,
    settings: &Settings,
    output: &Output,
) -> Result<i32> {
    // pre-commit help is identical for every config
    let mut run_once = invocation.wants_help();

    match invocation.command() {
        Some("-h" | "--help" | "help") => {
            commands::help::execute(output).await;
            run_once = true;
        }
        Some("-V" | "--version") => commands::version::execute(output).await,
        Some("install") => {
            return commands::install::execute(&invocation.opts, context, settings, output).await;
        }
        Some("uninstall") => {
            return commands::uninstall::execute(&invocation.opts, context, output).await;
        }
        _ => {}
    }

    commands::run::execute(invocation, context, settings, run_once).await
}

/// Log to stderr; `RUST_LOG` overrides the level picked from `WRE_COMMIT_DEBUG`
pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(default_filter(std::env::var_os(DEBUG_ENV).is_some()))
    });

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Filter used when `RUST_LOG` is unset; globset stays quiet at debug level
fn default_filter(debug: bool) -> &'static str {
    if debug { "debug,globset=warn" } else { "info" }
}
