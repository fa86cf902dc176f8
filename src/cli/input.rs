//! Path input for commands.

use std::io::BufRead;

use crate::error::AppError;

/// Returns the given paths, or reads them from stdin (one per line) when none were given.
pub fn paths_or_stdin(paths: Vec<String>) -> Result<Vec<String>, AppError> {
    if !paths.is_empty() {
        return Ok(paths);
    }

    tracing::debug!("Reading paths from stdin");
    read_paths(std::io::stdin().lock())
}

/// Reads one path per line, trimming whitespace and skipping blank lines.
pub fn read_paths<R: BufRead>(reader: R) -> Result<Vec<String>, AppError> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}
