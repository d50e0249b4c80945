use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::{HookError, HookType};
use crate::cli::Output;
use crate::git::GitRepo;

/// Marks a file as a wre-commit hook. Must stay byte-identical across releases.
pub const UNIQUE_SIGNATURE: &str = "wre-commit hook signature: 5b9c1e6f-wre-commit";

/// Found in hooks installed by the Python releases
pub const LEGACY_SIGNATURE: &str = "from wre_commit.main import main";

static SIGNATURES: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new([UNIQUE_SIGNATURE, LEGACY_SIGNATURE]).expect("valid signature patterns")
});

/// Whether the file at `path` (following symlinks) is one of ours
pub fn is_wre_commit_hook(path: &Path) -> Result<bool, HookError> {
    if !path.exists() {
        return Ok(false);
    }
    let content = fs::read(path).map_err(|source| HookError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SIGNATURES.is_match(&content))
}

/// Installs and removes hook symlinks in one hooks directory
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    pub fn new<P: Into<PathBuf>>(hooks_dir: P) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// Use the hooks directory of the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(GitRepo::discover(path)?.hooks_dir()))
    }

    /// The hook path and where a foreign hook is kept while we are installed
    pub fn hook_paths(&self, hook: HookType) -> (PathBuf, PathBuf) {
        let path = self.hooks_dir.join(hook.as_str());
        let legacy = PathBuf::from(format!("{}.legacy.{}", path.display(), crate::NAME));
        (path, legacy)
    }

    pub fn install(&self, hooks: &[HookType], executable: &Path, output: &Output) -> Result<()> {
        fs::create_dir_all(&self.hooks_dir)
            .with_context(|| format!("Creating hooks directory {}", self.hooks_dir.display()))?;

        for &hook in hooks {
            let (path, legacy) = self.hook_paths(hook);

            if entry_exists(&path) && !is_wre_commit_hook(&path)? {
                rename(&path, &legacy)?;
                output.info(&format!("Previous hook stored to {}", legacy.display()));
            }

            if entry_exists(&path) {
                remove(&path)?;
            }

            symlink(executable, &path)?;
            tracing::debug!("Linked {} -> {}", path.display(), executable.display());
            output.success(&format!("{hook} installed at {}", path.display()));
        }

        Ok(())
    }

    pub fn uninstall(&self, hooks: &[HookType], output: &Output) -> Result<()> {
        for &hook in hooks {
            let (path, legacy) = self.hook_paths(hook);

            if !entry_exists(&path) || !is_wre_commit_hook(&path)? {
                tracing::debug!("No wre-commit {hook} hook at {}", path.display());
                continue;
            }

            remove(&path)?;
            output.success(&format!("{hook} uninstalled"));

            if entry_exists(&legacy) {
                rename(&legacy, &path)?;
                output.info(&format!("Restored previous hook to {}", path.display()));
            }
        }

        Ok(())
    }
}

/// Exists as a directory entry, dangling symlinks included
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn remove(path: &Path) -> Result<(), HookError> {
    fs::remove_file(path).map_err(|source| HookError::Delete {
        path: path.to_path_buf(),
        source,
    })
}

fn rename(from: &Path, to: &Path) -> Result<(), HookError> {
    fs::rename(from, to).map_err(|source| HookError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn symlink(target: &Path, link: &Path) -> Result<(), HookError> {
    #[cfg(unix)]
    let linked = std::os::unix::fs::symlink(target, link);
    #[cfg(windows)]
    let linked = std::os::windows::fs::symlink_file(target, link);

    linked.map_err(|source| HookError::Symlink {
        target: target.to_path_buf(),
        link: link.to_path_buf(),
        source,
    })
}
