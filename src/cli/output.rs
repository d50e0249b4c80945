//! Terminal output for wre-commit's own messages
//!
//! pre-commit writes straight to the inherited terminal; this is only used
//! for what the wrapper itself reports (help, version, hook installation).

use console::style;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Output;

impl Output {
    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", style("✔").green(), message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    /// Print text as is, e.g. help and version
    pub fn plain(&self, message: &str) {
        println!("{message}");
    }
}
