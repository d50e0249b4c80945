//! Git hooks management module
//!
//! wre-commit installs itself by symlinking its executable into
//! `.git/hooks/<type>`. When git runs the hook, the symlink name tells us the
//! hook type. A hook that is not ours is kept aside as
//! `<type>.legacy.wre-commit` and restored on uninstall.

mod manager;

pub use manager::{HookManager, LEGACY_SIGNATURE, UNIQUE_SIGNATURE, is_wre_commit_hook};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Hook types wre-commit can be installed as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookType {
    PreCommit,
    CommitMsg,
    PostCheckout,
    PreMergeCommit,
    PrePush,
    PrepareCommitMsg,
}

impl HookType {
    pub const ALL: [HookType; 6] = [
        HookType::PreCommit,
        HookType::CommitMsg,
        HookType::PostCheckout,
        HookType::PreMergeCommit,
        HookType::PrePush,
        HookType::PrepareCommitMsg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::PreCommit => "pre-commit",
            HookType::CommitMsg => "commit-msg",
            HookType::PostCheckout => "post-checkout",
            HookType::PreMergeCommit => "pre-merge-commit",
            HookType::PrePush => "pre-push",
            HookType::PrepareCommitMsg => "prepare-commit-msg",
        }
    }

    /// Parse requested hook types; nothing requested means `pre-commit`.
    ///
    /// Every name is validated before any hook is touched.
    pub fn parse_list(names: &[String]) -> Result<Vec<HookType>, HookError> {
        if names.is_empty() {
            return Ok(vec![HookType::PreCommit]);
        }
        names.iter().map(|name| name.parse()).collect()
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookType {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookType::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| HookError::Unsupported(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Unsupported hook type: {0}")]
    Unsupported(String),

    #[error("Reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Deleting file {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Renaming file {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Symlinking file {} to {}: {source}", .target.display(), .link.display())]
    Symlink {
        target: PathBuf,
        link: PathBuf,
        source: std::io::Error,
    },
}
