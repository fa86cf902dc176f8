//! Classify command handler.

use std::process::ExitCode;

use color_eyre::Result;

use super::input::paths_or_stdin;
use super::App;
use crate::output::OutputFormat;
use crate::swagger::{classify_with_rule, ClassifiedPath};

impl App {
    /// Classify every path and print the outcome per path.
    pub(super) fn run_classify(paths: Vec<String>, format: OutputFormat) -> Result<ExitCode> {
        let paths = paths_or_stdin(paths)?;

        let classified: Vec<ClassifiedPath> = paths
            .into_iter()
            .map(|path| ClassifiedPath {
                classification: classify_with_rule(&path),
                path,
            })
            .collect();

        tracing::info!("Classified {} paths", classified.len());
        Self::print(&classified, format)?;
        Ok(ExitCode::SUCCESS)
    }
}
