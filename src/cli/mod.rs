//! CLI module for swagger-scout.
//!
//! Subcommands:
//! - `classify`: Classify each path and show the rule that decided it
//! - `normalize`: List the distinct swagger base directories
//! - `check`: Check that a changeset targets a single resource provider and version

mod check;
mod classify;
mod input;
mod normalize;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::git::RevisionRange;
use crate::output::{self, OutputFormat};

/// swagger-scout - Swagger path classification for specification repositories
#[derive(Parser)]
#[command(name = "swagger-scout")]
#[command(about = "Classify swagger paths and check changesets for a single API version")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (defaults to the configured one)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify paths into swagger metadata
    Classify {
        /// Paths to classify (read from stdin when omitted)
        paths: Vec<String>,
    },

    /// Reduce paths to their distinct swagger base directories
    Normalize {
        /// Paths to normalize (read from stdin when omitted)
        paths: Vec<String>,
    },

    /// Check that a changeset targets exactly one resource provider and version
    Check {
        /// Changed paths (read from stdin when omitted and no --git range is given)
        paths: Vec<String>,

        /// Take the changeset from git history: FROM or FROM..TO (TO defaults to HEAD)
        #[arg(long, value_name = "RANGE", conflicts_with = "paths")]
        git: Option<RevisionRange>,

        /// Repository to diff (defaults to the configured one)
        #[arg(long, requires = "git")]
        repo: Option<PathBuf>,
    },
}

impl App {
    /// Run the CLI application.
    pub fn run(self, config: &Config) -> color_eyre::Result<ExitCode> {
        let format = self.format.unwrap_or(config.output.format);

        match self.command {
            Command::Classify { paths } => Self::run_classify(paths, format),
            Command::Normalize { paths } => Self::run_normalize(paths, format),
            Command::Check { paths, git, repo } => {
                let repo = repo.unwrap_or_else(|| config.git.repository.clone());
                Self::run_check(paths, git, &repo, format)
            }
        }
    }

    /// Tracing filter for this invocation.
    pub fn log_filter(&self, config: &Config) -> String {
        match &config.log.filter {
            Some(filter) => filter.clone(),
            None if self.verbose => "debug".to_string(),
            None => "info".to_string(),
        }
    }

    fn print<T: serde::Serialize>(value: &T, format: OutputFormat) -> color_eyre::Result<()> {
        println!("{}", output::render(value, format)?);
        Ok(())
    }
}
