//! # wre-commit - a dispatch wrapper for pre-commit
//!
//! wre-commit sits in front of [pre-commit](https://pre-commit.com) and adds:
//!
//! - **Docker dispatch**: a config carrying
//!   `### wre-commit-docker-image: <image>` runs pre-commit inside that image
//!   with the working directory mounted at the same path
//! - **Config wildcards**: `--config` accepts a glob, default
//!   `.pre-commit-config*.yaml`, and every match is run in order
//! - **Multi-document configs**: `---` separated documents run one by one,
//!   with line numbers preserved
//! - **fail_fast across configs**: a failing config with `fail_fast: true`
//!   stops the remaining ones; the exit code is the highest seen
//!
//! ```bash
//! # install as pre-commit and commit-msg hooks
//! wre-commit install -t pre-commit,commit-msg
//!
//! # everything else goes to pre-commit
//! wre-commit run --all-files
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod hooks;
pub mod precommit;
pub mod shared;

pub use cli::{Invocation, Output};
pub use config::{Context, Settings};

/// Program name, also used for hook legacy suffixes
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
