//! Multi-document YAML splitting
//!
//! pre-commit reads a single YAML document per config, so a file holding
//! several `---` separated documents is split and each part is run on its own.

use anyhow::{Context, Result};
use std::path::Path;

/// Split a YAML stream into its documents.
///
/// A `---` line opens a new document only when the current one already has
/// content, so a leading separator is kept in the first document. The
/// separator line belongs to the document it opens. With
/// `preserve_line_numbers`, every new document is padded with blank lines so
/// that pre-commit reports the same line numbers as the original file.
pub fn split_documents(content: &str, preserve_line_numbers: bool) -> Vec<String> {
    let mut documents = vec![String::new()];

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let current_has_content = documents.last().is_some_and(|doc| !doc.is_empty());
        if line.trim_end() == "---" && current_has_content {
            let padding = if preserve_line_numbers {
                "\n".repeat(index)
            } else {
                String::new()
            };
            documents.push(padding);
        }
        if let Some(current) = documents.last_mut() {
            current.push_str(line);
        }
    }

    documents
}

/// Read a config file and split it, keeping line numbers
pub fn read_documents(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Config file {}", path.display()))?;
    Ok(split_documents(&content, true))
}
