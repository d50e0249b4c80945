//! Running pre-commit for a single config
//!
//! A config either runs with the local pre-commit installation or, when it
//! names a docker image, with pre-commit inside that image. The working
//! directory is mounted at the same path so file names stay valid.

use anyhow::{Context as _, Result};
use tokio::process::Command;

use crate::config::{Context, Directives, Settings};
use crate::shared::process;

/// Options selecting the config file, shared with pre-commit
pub const CONFIG_KEYS: [&str; 2] = ["-c", "--config"];

/// Exit code of one pre-commit run and whether its config asked to fail fast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub fail_fast: bool,
}

impl RunOutcome {
    /// A failing run of a `fail_fast` config stops the remaining configs
    pub fn stops_remaining(&self) -> bool {
        self.exit_code != 0 && self.fail_fast
    }
}

pub struct PreCommit<'a> {
    hook_type: String,
    opts: Vec<String>,
    args: Vec<String>,
    command: Option<String>,
    context: &'a Context,
    settings: &'a Settings,
}

impl<'a> PreCommit<'a> {
    pub fn new(
        hook_type: String,
        opts: Vec<String>,
        args: Vec<String>,
        context: &'a Context,
        settings: &'a Settings,
    ) -> Self {
        let command = opts.first().cloned();
        Self {
            hook_type,
            opts,
            args,
            command,
            context,
            settings,
        }
    }

    /// Run pre-commit over one config file whose content is `content`
    pub async fn run(&mut self, config_file: &str, content: &str) -> Result<RunOutcome> {
        let directives = Directives::parse(content);
        let argv = self.compose(config_file, &directives)?;

        tracing::debug!("Executing: {}", argv.join(" "));
        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .status()
            .await
            .with_context(|| format!("Execution of command `{}` failed", argv[0]))?;

        let exit_code = status.code().unwrap_or_else(|| {
            tracing::warn!("`{}` was terminated by a signal", argv[0]);
            1
        });

        Ok(RunOutcome {
            exit_code,
            fail_fast: directives.fail_fast,
        })
    }

    /// Full command line for one config
    pub fn compose(&mut self, config_file: &str, directives: &Directives) -> Result<Vec<String>> {
        let mut argv = match &directives.docker_image {
            Some(image) => self.docker_command(image),
            None => self.local_command()?,
        };

        if self.context.called_by_git {
            argv.extend(self.git_arguments(config_file));
        } else {
            self.fix_config_option(config_file);
        }

        argv.extend(self.opts.iter().cloned());
        argv.extend(self.args.iter().cloned());
        Ok(argv)
    }

    fn docker_command(&self, image: &str) -> Vec<String> {
        let pwd = self.context.cwd.display().to_string();
        let mut argv = vec![
            self.settings.docker.clone(),
            "run".to_string(),
            "-v".to_string(),
            format!("{pwd}/:{pwd}/:rw"),
            "-w".to_string(),
            pwd,
            image.to_string(),
            "pre-commit".to_string(),
        ];

        // git runs hooks without a terminal
        if !self.context.called_by_git {
            argv.insert(2, "-it".to_string());
        }

        argv
    }

    fn local_command(&self) -> Result<Vec<String>> {
        let executable = process::which(&self.settings.pre_commit)?;
        let mut argv = Vec::with_capacity(2);
        if let Some(interpreter) = process::shebang(&executable)? {
            argv.push(interpreter);
        }
        argv.push(executable.display().to_string());
        Ok(argv)
    }

    fn git_arguments(&self, config_file: &str) -> Vec<String> {
        vec![
            "hook-impl".to_string(),
            "--config".to_string(),
            config_file.to_string(),
            "--hook-type".to_string(),
            self.hook_type.clone(),
            "--hook-dir".to_string(),
            self.context.cwd.display().to_string(),
            "--".to_string(),
        ]
    }

    /// Point the `--config` option at `config_file`, adding it if missing
    fn fix_config_option(&mut self, config_file: &str) {
        let last = self.opts.len().saturating_sub(1);

        for i in 0..self.opts.len() {
            if CONFIG_KEYS.contains(&self.opts[i].as_str()) && i < last {
                self.opts[i + 1] = config_file.to_string();
                return;
            }
            let key = self.opts[i].split('=').next().unwrap_or_default().to_string();
            if CONFIG_KEYS.contains(&key.as_str()) {
                self.opts[i] = format!("{key}={config_file}");
                return;
            }
        }

        if self.command.as_deref() != Some("help") {
            self.opts.push(format!("--config={config_file}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn context(called_by_git: bool) -> Context {
        Context {
            cwd: PathBuf::from("/work/project"),
            called_by_git,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn docker(image: &str) -> Directives {
        Directives {
            docker_image: Some(image.to_string()),
            fail_fast: false,
        }
    }

    #[test]
    fn test_docker_command_manual() {
        let ctx = context(false);
        let settings = Settings::default();
        let mut pre_commit = PreCommit::new(
            "wre-commit".into(),
            strings(&["run", "--all-files"]),
            Vec::new(),
            &ctx,
            &settings,
        );

        let argv = pre_commit.compose(".pre-commit-config.yaml", &docker("tools:1")).unwrap();
        assert_eq!(
            argv,
            strings(&[
                "docker",
                "run",
                "-it",
                "-v",
                "/work/project/:/work/project/:rw",
                "-w",
                "/work/project",
                "tools:1",
                "pre-commit",
                "run",
                "--all-files",
                "--config=.pre-commit-config.yaml",
            ])
        );
    }

    #[test]
    fn test_docker_command_from_git() {
        let ctx = context(true);
        let settings = Settings::default();
        let mut pre_commit = PreCommit::new(
            "commit-msg".into(),
            strings(&[".git/COMMIT_EDITMSG"]),
            Vec::new(),
            &ctx,
            &settings,
        );

        let argv = pre_commit.compose("ci.yaml", &docker("tools:1")).unwrap();
        assert_eq!(
            argv,
            strings(&[
                "docker",
                "run",
                "-v",
                "/work/project/:/work/project/:rw",
                "-w",
                "/work/project",
                "tools:1",
                "pre-commit",
                "hook-impl",
                "--config",
                "ci.yaml",
                "--hook-type",
                "commit-msg",
                "--hook-dir",
                "/work/project",
                "--",
                ".git/COMMIT_EDITMSG",
            ])
        );
    }

    #[test]
    fn test_config_option_value_is_replaced_each_run() {
        let ctx = context(false);
        let settings = Settings::default();
        let mut pre_commit = PreCommit::new(
            "wre-commit".into(),
            strings(&["run", "-c", "*.yaml", "--verbose"]),
            strings(&["--", "extra"]),
            &ctx,
            &settings,
        );

        let argv = pre_commit.compose("a.yaml", &docker("img")).unwrap();
        assert!(argv.ends_with(&strings(&["run", "-c", "a.yaml", "--verbose", "--", "extra"])));

        pre_commit.compose("b.yaml", &docker("img")).unwrap();
        assert_eq!(pre_commit.opts, strings(&["run", "-c", "b.yaml", "--verbose"]));
    }

    #[test]
    fn test_config_option_with_equals() {
        let ctx = context(false);
        let settings = Settings::default();
        let mut pre_commit = PreCommit::new(
            "wre-commit".into(),
            strings(&["run", "--config=configs/*.yaml"]),
            Vec::new(),
            &ctx,
            &settings,
        );

        pre_commit.compose("configs/a.yaml", &docker("img")).unwrap();
        assert_eq!(pre_commit.opts, strings(&["run", "--config=configs/a.yaml"]));
    }

    #[test]
    fn test_trailing_config_flag_takes_inline_value() {
        let ctx = context(false);
        let settings = Settings::default();
        let mut pre_commit = PreCommit::new(
            "wre-commit".into(),
            strings(&["run", "-c"]),
            Vec::new(),
            &ctx,
            &settings,
        );

        pre_commit.compose("a.yaml", &docker("img")).unwrap();
        assert_eq!(pre_commit.opts, strings(&["run", "-c=a.yaml"]));
    }

    #[test]
    fn test_help_command_has_no_config() {
        let ctx = context(false);
        let settings = Settings::default();
        let mut pre_commit =
            PreCommit::new("wre-commit".into(), strings(&["help"]), Vec::new(), &ctx, &settings);

        pre_commit.compose("a.yaml", &docker("img")).unwrap();
        assert_eq!(pre_commit.opts, strings(&["help"]));
    }

    #[cfg(unix)]
    fn local_settings(dir: &std::path::Path, content: &[u8]) -> Settings {
        use std::os::unix::fs::PermissionsExt;

        let executable = dir.join("pre-commit");
        std::fs::write(&executable, content).unwrap();
        std::fs::set_permissions(&executable, std::fs::Permissions::from_mode(0o755)).unwrap();
        Settings {
            pre_commit: executable.display().to_string(),
            ..Settings::default()
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_local_command_runs_shebang_interpreter() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let ctx = context(false);
        let settings = local_settings(temp_dir.path(), b"#!/opt/venv/bin/python3\nimport sys\n");
        let executable = process::which(&settings.pre_commit).unwrap();
        let mut pre_commit =
            PreCommit::new("wre-commit".into(), strings(&["run"]), Vec::new(), &ctx, &settings);

        let argv = pre_commit.compose("a.yaml", &Directives::default()).unwrap();
        assert_eq!(
            argv,
            vec![
                "/opt/venv/bin/python3".to_string(),
                executable.display().to_string(),
                "run".to_string(),
                "--config=a.yaml".to_string(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_local_command_without_shebang_runs_executable() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let ctx = context(true);
        let settings = local_settings(temp_dir.path(), &[0x7f, b'E', b'L', b'F', 0x02, 0x01]);
        let executable = process::which(&settings.pre_commit).unwrap();
        let mut pre_commit = PreCommit::new(
            "pre-push".into(),
            strings(&["origin"]),
            Vec::new(),
            &ctx,
            &settings,
        );

        let argv = pre_commit.compose("a.yaml", &Directives::default()).unwrap();
        assert_eq!(argv[0], executable.display().to_string());
        assert_eq!(
            argv[1..].to_vec(),
            strings(&[
                "hook-impl",
                "--config",
                "a.yaml",
                "--hook-type",
                "pre-push",
                "--hook-dir",
                "/work/project",
                "--",
                "origin",
            ])
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_signal_counts_as_failure() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let ctx = context(false);
        let settings = local_settings(temp_dir.path(), b"#!/bin/sh\nkill -KILL $$\n");
        let mut pre_commit =
            PreCommit::new("wre-commit".into(), strings(&["run"]), Vec::new(), &ctx, &settings);

        let outcome = pre_commit.run("a.yaml", "fail_fast: true\n").await.unwrap();
        assert_eq!(
            outcome,
            RunOutcome {
                exit_code: 1,
                fail_fast: true,
            }
        );
        assert!(outcome.stops_remaining());
    }

    #[tokio::test]
    async fn test_spawn_failure_is_an_error() {
        let ctx = context(false);
        let settings = Settings {
            docker: "wre-commit-test-no-such-docker".to_string(),
            ..Settings::default()
        };
        let mut pre_commit =
            PreCommit::new("wre-commit".into(), strings(&["run"]), Vec::new(), &ctx, &settings);

        let err = pre_commit
            .run("a.yaml", "### wre-commit-docker-image: img\n")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Execution of command `wre-commit-test-no-such-docker` failed"
        );
    }

    #[test]
    fn test_missing_local_pre_commit() {
        let ctx = context(false);
        let settings = Settings {
            pre_commit: "wre-commit-test-no-such-pre-commit".to_string(),
            ..Settings::default()
        };
        let mut pre_commit =
            PreCommit::new("wre-commit".into(), Vec::new(), Vec::new(), &ctx, &settings);

        let err = pre_commit
            .compose("a.yaml", &Directives::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Executable `wre-commit-test-no-such-pre-commit`: not found"
        );
    }

    #[test]
    fn test_outcome_stops_remaining() {
        let failed = RunOutcome {
            exit_code: 1,
            fail_fast: true,
        };
        let passed = RunOutcome {
            exit_code: 0,
            fail_fast: true,
        };
        let tolerant = RunOutcome {
            exit_code: 3,
            fail_fast: false,
        };
        assert!(failed.stops_remaining());
        assert!(!passed.stops_remaining());
        assert!(!tolerant.stops_remaining());
    }
}
