use crate::cli::Output;

/// Print our version; every pre-commit prints its own after it
pub async fn execute(output: &Output) {
    output.plain(&format!("{} {}", crate::NAME, crate::VERSION));
}
