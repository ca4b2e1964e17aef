//! Checkpoint gateway
//!
//! The session and command layers program against [`CheckpointGateway`];
//! [`GitGateway`] implements it over the system `git` binary. The trait keeps
//! position resolution testable without a real repository.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DeckError;
use crate::git::runner::{run_git_bool, run_git_checked};

pub trait CheckpointGateway {
    /// Whether the working directory is under version control. Never fails.
    fn is_repository(&self) -> bool;

    /// Fully-qualified identifier of the current position (a commit hash).
    fn current_commit(&self) -> Result<String, DeckError>;

    /// Short human-facing label of the current position: the branch name,
    /// or `HEAD` when detached. Distinct from [`Self::current_commit`].
    fn current_branch(&self) -> Result<String, DeckError>;

    /// Create-or-move `branch` to `commit` and switch to it, as one unit.
    fn create_and_switch(&self, branch: &str, commit: &str) -> Result<(), DeckError>;

    /// Switch to an existing branch.
    fn switch_to(&self, branch: &str) -> Result<(), DeckError>;

    /// Switch to a commit, leaving HEAD detached.
    fn switch_detached(&self, commit: &str) -> Result<(), DeckError>;

    /// Stash uncommitted changes, untracked files included. Safe to call
    /// with nothing to save; returns whether a stash entry was created.
    fn save_working_state(&self) -> Result<bool, DeckError>;

    /// Pop the most recent stash entry. Callers only invoke this when a
    /// preceding [`Self::save_working_state`] reported `true`, so a user's
    /// own stash entries are never touched.
    fn restore_working_state(&self) -> Result<(), DeckError>;

    /// One-line subject of a commit, for user feedback.
    fn title_of(&self, commit: &str) -> Result<String, DeckError>;
}

/// Gateway implementation over the system `git` binary.
pub struct GitGateway {
    repo_root: PathBuf,
}

impl GitGateway {
    pub fn new(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
        }
    }
}

impl CheckpointGateway for GitGateway {
    fn is_repository(&self) -> bool {
        run_git_bool(&["rev-parse", "--git-dir"], &self.repo_root)
    }

    fn current_commit(&self) -> Result<String, DeckError> {
        run_git_checked(&["rev-parse", "HEAD"], &self.repo_root)
    }

    fn current_branch(&self) -> Result<String, DeckError> {
        run_git_checked(&["rev-parse", "--abbrev-ref", "HEAD"], &self.repo_root)
    }

    fn create_and_switch(&self, branch: &str, commit: &str) -> Result<(), DeckError> {
        // Single git invocation: create-or-reset and switch cannot come apart.
        run_git_checked(&["switch", "-C", branch, commit], &self.repo_root)?;
        Ok(())
    }

    fn switch_to(&self, branch: &str) -> Result<(), DeckError> {
        run_git_checked(&["switch", branch], &self.repo_root)?;
        Ok(())
    }

    fn switch_detached(&self, commit: &str) -> Result<(), DeckError> {
        run_git_checked(&["switch", "--detach", commit], &self.repo_root)?;
        Ok(())
    }

    fn save_working_state(&self) -> Result<bool, DeckError> {
        let stdout = run_git_checked(&["stash", "push", "--include-untracked"], &self.repo_root)?;
        let stashed = !stdout.contains("No local changes to save");
        debug!(stashed, "saved working state");
        Ok(stashed)
    }

    fn restore_working_state(&self) -> Result<(), DeckError> {
        run_git_checked(&["stash", "pop"], &self.repo_root)?;
        Ok(())
    }

    fn title_of(&self, commit: &str) -> Result<String, DeckError> {
        run_git_checked(&["log", "-1", "--pretty=format:%s", commit], &self.repo_root)
    }
}
