//! Executable discovery
//!
//! Locates executables on `PATH` and reads interpreters from shebang lines.

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SHEBANG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#!(\S+)").expect("valid shebang regex"));

/// Longest first line we inspect for a shebang
const SHEBANG_LIMIT: u64 = 4096;

/// Find an executable in `PATH`
pub fn which(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| anyhow!("Executable `{name}`: not found"))
}

/// Interpreter named by the shebang of `file`, if it has one
pub fn shebang(file: &Path) -> Result<Option<String>> {
    let handle = File::open(file)
        .with_context(|| format!("Getting shebang from file {}", file.display()))?;

    let mut first_line = Vec::new();
    BufReader::new(handle)
        .take(SHEBANG_LIMIT)
        .read_until(b'\n', &mut first_line)
        .with_context(|| format!("Getting shebang from file {}", file.display()))?;

    let first_line = String::from_utf8_lossy(&first_line);
    Ok(SHEBANG
        .captures(&first_line)
        .map(|captures| captures[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_shebang_interpreter() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("pre-commit");
        fs::write(&script, "#!/opt/venv/bin/python3 -E\nimport sys\n").unwrap();

        assert_eq!(
            shebang(&script).unwrap(),
            Some("/opt/venv/bin/python3".to_string())
        );
    }

    #[test]
    fn test_shebang_env_keeps_first_token() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("pre-commit");
        fs::write(&script, "#!/usr/bin/env python3\n").unwrap();

        assert_eq!(shebang(&script).unwrap(), Some("/usr/bin/env".to_string()));
    }

    #[test]
    fn test_no_shebang() {
        let temp_dir = TempDir::new().unwrap();
        let binary = temp_dir.path().join("pre-commit");
        fs::write(&binary, [0x7f, b'E', b'L', b'F', 0x02, 0x01]).unwrap();

        assert_eq!(shebang(&binary).unwrap(), None);
    }

    #[test]
    fn test_shebang_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = shebang(&temp_dir.path().join("absent")).unwrap_err();
        assert!(err.to_string().contains("Getting shebang from file"));
    }

    #[test]
    fn test_which_not_found() {
        let err = which("wre-commit-definitely-not-installed").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Executable `wre-commit-definitely-not-installed`: not found"
        );
    }
}
