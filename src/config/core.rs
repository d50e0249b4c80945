use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of the environment variables read into [`Settings`]
pub const ENV_PREFIX: &str = "WRE_COMMIT_";

/// Wrapper settings, overridable through `WRE_COMMIT_*` environment variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the local pre-commit executable looked up on `PATH`
    pub pre_commit: String,

    /// Container runtime used for configs carrying a docker image
    pub docker: String,

    /// Executable symlinked into `.git/hooks`
    pub executable: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pre_commit: "pre-commit".to_string(),
            docker: "docker".to_string(),
            executable: crate::NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment())
    }

    /// Defaults overlaid with the environment
    pub fn figment() -> Figment {
        // DEBUG is a presence flag read by the logger, not a setting
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["debug"]))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }
}

/// Facts about the current process captured once at startup
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory, mounted into containers and used for temp configs
    pub cwd: PathBuf,

    /// Whether git is running us as a hook (`git commit` exports `GIT_AUTHOR_DATE`)
    pub called_by_git: bool,
}

impl Context {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            cwd: std::env::current_dir()?,
            called_by_git: std::env::var_os("GIT_AUTHOR_DATE").is_some(),
        })
    }
}
