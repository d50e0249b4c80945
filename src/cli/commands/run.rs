use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::cli::Invocation;
use crate::config::{Context, DEFAULT_CONFIG_PATTERN, Settings, read_documents};
use crate::precommit::{CONFIG_KEYS, PreCommit, RunOutcome};
use crate::shared::glob;

/// Run pre-commit over every matching config and document.
///
/// Returns the highest exit code seen. Stops after the first run when
/// `run_once` is set, or after a failing run of a `fail_fast` document.
pub async fn execute(
    invocation: Invocation,
    context: &Context,
    settings: &Settings,
    run_once: bool,
) -> Result<i32> {
    let pattern = invocation
        .option(&CONFIG_KEYS)
        .unwrap_or(DEFAULT_CONFIG_PATTERN)
        .to_string();
    let config_files = glob::expand_config_pattern(&pattern, &context.cwd)?;
    if config_files.is_empty() {
        tracing::warn!("No config file matches {pattern}");
        return Ok(0);
    }

    let Invocation { name, opts, args } = invocation;
    let mut pre_commit = PreCommit::new(name, opts, args, context, settings);
    let mut exit_code = 0;

    for config_file in &config_files {
        let documents = read_documents(&context.cwd.join(config_file))?;

        // a single document runs against the original file
        if let [document] = documents.as_slice() {
            let outcome = pre_commit.run(config_file, document).await?;
            exit_code = exit_code.max(outcome.exit_code);
            if should_stop(run_once, &outcome) {
                return Ok(exit_code);
            }
            continue;
        }

        for (index, document) in documents.iter().enumerate() {
            let split = write_document(document, &context.cwd)?;
            let split_path = split.path().display().to_string();
            tracing::debug!(
                "Extracted {}. document from {} to {}",
                index + 1,
                config_file,
                split_path
            );

            let outcome = pre_commit.run(&split_path, document).await?;
            exit_code = exit_code.max(outcome.exit_code);
            if should_stop(run_once, &outcome) {
                return Ok(exit_code);
            }
        }
    }

    Ok(exit_code)
}

fn should_stop(run_once: bool, outcome: &RunOutcome) -> bool {
    run_once || outcome.stops_remaining()
}

/// Write one document to a temporary config next to the original ones.
/// The file is deleted when the handle drops.
fn write_document(document: &str, dir: &Path) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(".pre-commit-config-")
        .suffix(".yaml")
        .tempfile_in(dir)
        .with_context(|| format!("Creating temporary config in {}", dir.display()))?;

    file.write_all(document.as_bytes())
        .and_then(|_| file.flush())
        .with_context(|| format!("Writing temporary config {}", file.path().display()))?;

    Ok(file)
}
