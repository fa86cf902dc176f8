//! Git operations for building a changeset from local history.
//!
//! Lists the files changed between two revisions so they can be fed to the
//! changeset check without going through a hosting platform.

use std::path::Path;

use git2::Repository;

use crate::error::AppError;

/// A changed file in a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Repository-relative path of the file.
    pub path: String,
    /// Type of change.
    pub change_type: ChangeType,
}

/// Type of change to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
    Renamed,
}

/// A revision range, `FROM` or `FROM..TO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub from: String,
    /// Defaults to HEAD.
    pub to: Option<String>,
}

impl std::str::FromStr for RevisionRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = match s.split_once("..") {
            Some((from, to)) => (from, Some(to)),
            None => (s, None),
        };

        if from.is_empty() {
            return Err(format!("Invalid revision range '{}': missing start revision", s));
        }

        Ok(Self {
            from: from.to_string(),
            to: to.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }
}

/// Git operations helper.
pub struct GitOps {
    repo: Repository,
}

impl GitOps {
    /// Open a git repository at (or above) the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => AppError::RepoNotFound(path.display().to_string()),
            _ => AppError::GitMessage {
                message: format!("Failed to open repository: {}", e),
            },
        })?;
        Ok(Self { repo })
    }

    /// Resolve a revision (SHA, branch, tag, `HEAD~1`, ...) to its tree.
    fn tree_for(&self, revision: &str) -> Result<git2::Tree<'_>, AppError> {
        let object = self
            .repo
            .revparse_single(revision)
            .map_err(|e| AppError::GitMessage {
                message: format!("Unknown revision '{}': {}", revision, e),
            })?;

        Ok(object.peel_to_tree()?)
    }

    /// Get list of files changed between two revisions.
    ///
    /// If `to` is None, uses HEAD.
    pub fn changed_files(&self, from: &str, to: Option<&str>) -> Result<Vec<ChangedFile>, AppError> {
        let from_tree = self.tree_for(from)?;
        let to_tree = self.tree_for(to.unwrap_or("HEAD"))?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&from_tree), Some(&to_tree), None)?;

        let files: Vec<ChangedFile> = diff
            .deltas()
            .filter_map(|delta| {
                let path = delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().replace('\\', "/"))?;

                let change_type = match delta.status() {
                    git2::Delta::Added => ChangeType::Added,
                    git2::Delta::Deleted => ChangeType::Deleted,
                    git2::Delta::Renamed => ChangeType::Renamed,
                    _ => ChangeType::Modified,
                };
                Some(ChangedFile { path, change_type })
            })
            .collect();

        tracing::debug!(from, to = ?to, count = files.len(), "Listed changed files");
        Ok(files)
    }

    /// Changed paths for a revision range.
    pub fn changed_paths(&self, range: &RevisionRange) -> Result<Vec<String>, AppError> {
        Ok(self
            .changed_files(&range.from, range.to.as_deref())?
            .into_iter()
            .map(|file| file.path)
            .collect())
    }
}
