//! Glob pattern utilities
//!
//! Expands the `--config` pattern into the list of config files to run,
//! following shell glob rules: wildcards stay within one path component and
//! never match a leading dot unless the pattern component starts with one.

use anyhow::{Context, Result};
use globset::GlobBuilder;
use std::path::Path;
use walkdir::WalkDir;

/// Check if a string contains glob pattern characters
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Expand a config file pattern relative to `base_dir`.
///
/// Returned paths are spelled the way the pattern spells them (relative
/// patterns give relative paths) and are sorted lexicographically.
pub fn expand_config_pattern<P: AsRef<Path>>(pattern: &str, base_dir: P) -> Result<Vec<String>> {
    let base_dir = base_dir.as_ref();

    if !is_glob_pattern(pattern) {
        return Ok(if base_dir.join(pattern).is_file() {
            vec![pattern.to_string()]
        } else {
            Vec::new()
        });
    }

    let components: Vec<&str> = pattern.split('/').collect();
    let first_glob = components
        .iter()
        .position(|component| is_glob_pattern(component))
        .unwrap_or(0);

    let mut root = components[..first_glob].join("/");
    if root.is_empty() && pattern.starts_with('/') {
        root.push('/');
    }
    let walk_root = if root.is_empty() {
        base_dir.to_path_buf()
    } else {
        base_dir.join(&root)
    };
    let pattern_tail = &components[first_glob..];
    let depth = pattern_tail.len();

    let matcher = GlobBuilder::new(&shell_pattern(pattern))
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid config pattern `{pattern}`"))?
        .compile_matcher();

    let mut matches = Vec::new();
    for entry in WalkDir::new(&walk_root)
        .min_depth(depth)
        .max_depth(depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(&walk_root) else {
            continue;
        };
        let names: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let hidden_mismatch = names
            .iter()
            .zip(pattern_tail)
            .any(|(name, component)| name.starts_with('.') && !component.starts_with('.'));
        if hidden_mismatch {
            continue;
        }

        let relative = names.join("/");
        let candidate = match root.as_str() {
            "" => relative,
            "/" => format!("/{relative}"),
            root => format!("{root}/{relative}"),
        };
        if matcher.is_match(&candidate) {
            matches.push(candidate);
        }
    }

    matches.sort();
    Ok(matches)
}

/// Rewrite a shell pattern into globset syntax.
///
/// Braces are literal in the shell but alternation in globset, and a `[`
/// without a closing `]` in the same component is a literal `[`.
fn shell_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut translated = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&next) => {
                    translated.push('\\');
                    translated.push(next);
                    i += 1;
                }
                None => translated.push_str("\\\\"),
            },
            c @ ('{' | '}') => {
                translated.push('[');
                translated.push(c);
                translated.push(']');
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    translated.extend(&chars[i..=end]);
                    i = end;
                }
                None => translated.push_str("[[]"),
            },
            c => translated.push(c),
        }
        i += 1;
    }

    translated
}

/// Index of the `]` closing the character class opened at `start`
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if matches!(chars.get(i), Some('!' | '^')) {
        i += 1;
    }
    // a leading `]` is a member, not the end
    if chars.get(i) == Some(&']') {
        i += 1;
    }

    while let Some(&c) = chars.get(i) {
        match c {
            ']' => return Some(i),
            '/' => return None,
            _ => i += 1,
        }
    }
    None
}
