//! Git integration layer for wre-commit
//!
//! Only repository discovery is needed: hooks live in the common git dir, so
//! linked worktrees share the hooks of their main repository.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).context("No git dir detected")?;
        Ok(Self { repo })
    }

    /// The git dir shared by all worktrees
    pub fn common_dir(&self) -> &Path {
        self.repo.commondir()
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.common_dir().join("hooks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hooks_dir_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        Repository::init(temp_dir.path()).unwrap();
        let nested = temp_dir.path().join("src/deep");
        std::fs::create_dir_all(&nested).unwrap();

        let repo = GitRepo::discover(&nested).unwrap();
        let expected = temp_dir.path().join(".git").canonicalize().unwrap();
        assert_eq!(repo.common_dir().canonicalize().unwrap(), expected);
        assert!(repo.hooks_dir().ends_with("hooks"));
    }

    #[test]
    fn test_discover_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        // The temp dir may itself sit inside a checkout on some machines
        if let Err(err) = GitRepo::discover(temp_dir.path()) {
            assert_eq!(err.to_string(), "No git dir detected");
        }
    }
}
