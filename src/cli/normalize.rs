//! Normalize command handler.

use std::process::ExitCode;

use color_eyre::Result;

use super::input::paths_or_stdin;
use super::App;
use crate::output::OutputFormat;
use crate::swagger::normalize;

impl App {
    /// Print the distinct swagger base directories of the given paths.
    pub(super) fn run_normalize(paths: Vec<String>, format: OutputFormat) -> Result<ExitCode> {
        let paths = paths_or_stdin(paths)?;
        let bases = normalize(&paths);

        tracing::info!(
            "Reduced {} paths to {} swagger base directories",
            paths.len(),
            bases.len()
        );
        Self::print(&bases, format)?;
        Ok(ExitCode::SUCCESS)
    }
}
