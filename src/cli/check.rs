//! Check command handler.

use std::path::Path;
use std::process::ExitCode;

use color_eyre::Result;

use super::input::paths_or_stdin;
use super::App;
use crate::git::{GitOps, RevisionRange};
use crate::output::OutputFormat;
use crate::swagger::{ChangesetReport, Verdict};

/// Process exit status for a verdict: 0 when valid, 1 when invalid.
pub(super) fn exit_status(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Valid => 0,
        Verdict::Invalid(_) => 1,
    }
}

impl App {
    /// Evaluate a changeset; exits with status 1 when it is invalid.
    pub(super) fn run_check(
        paths: Vec<String>,
        git: Option<RevisionRange>,
        repo: &Path,
        format: OutputFormat,
    ) -> Result<ExitCode> {
        let report = Self::check_report(paths, git, repo)?;
        Self::print(&report, format)?;
        Ok(ExitCode::from(exit_status(report.verdict)))
    }

    /// Collect the changeset and build its report.
    pub(super) fn check_report(
        paths: Vec<String>,
        git: Option<RevisionRange>,
        repo: &Path,
    ) -> Result<ChangesetReport> {
        let paths = match git {
            Some(range) => {
                tracing::info!("Collecting changed files from {}", repo.display());
                GitOps::open(repo)?.changed_paths(&range)?
            }
            None => paths_or_stdin(paths)?,
        };

        let report = ChangesetReport::build(&paths);
        match report.verdict {
            Verdict::Valid => tracing::info!(
                "Changeset is valid: {} of {} paths target {}",
                report.classified_count(),
                report.paths.len(),
                report
                    .rp_versions
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            ),
            Verdict::Invalid(reason) => tracing::info!("Changeset is invalid: {}", reason),
        }

        Ok(report)
    }
}
