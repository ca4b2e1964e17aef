//! Session locking
//!
//! Only one interactive session may run against a repository at a time. The
//! lock is advisory (fs2), taken on a file inside the git directory so it is
//! never tracked or stashed, held for the session's lifetime, and released
//! on drop.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use fs2::FileExt;

use crate::git::runner::run_git_checked;

const LOCK_FILE_NAME: &str = "gitdeck-session.lock";

pub struct SessionLock {
    _file: std::fs::File,
}

impl SessionLock {
    /// Acquire the session lock, failing fast when another session holds it.
    pub fn acquire(repo_root: &Path) -> Result<Self> {
        let path = lock_path(repo_root)?;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;

        if file.try_lock_exclusive().is_err() {
            bail!("another gitdeck session is already running in this repository");
        }

        Ok(Self { _file: file })
    }
}

fn lock_path(repo_root: &Path) -> Result<PathBuf> {
    let git_dir = run_git_checked(&["rev-parse", "--git-dir"], repo_root)?;
    let git_dir = PathBuf::from(git_dir);
    let git_dir = if git_dir.is_absolute() {
        git_dir
    } else {
        repo_root.join(git_dir)
    };
    Ok(git_dir.join(LOCK_FILE_NAME))
}
