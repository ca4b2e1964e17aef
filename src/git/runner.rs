//! Git command runner
//!
//! Central wrappers around `Command::new("git")` so every call site gets the
//! same working-directory handling and the same typed error shape.

use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::DeckError;

/// Run a git command and return the raw Output.
///
/// Use this when you need access to both stdout and stderr, or custom
/// error handling logic.
pub fn run_git(args: &[&str], repo_root: &Path) -> Result<Output, DeckError> {
    debug!(?args, "running git");
    Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .map_err(|e| DeckError::Gateway {
            command: args.first().unwrap_or(&"").to_string(),
            stderr: e.to_string(),
        })
}

/// Run a git command, check for success, and return stdout trimmed.
pub fn run_git_checked(args: &[&str], repo_root: &Path) -> Result<String, DeckError> {
    let output = run_git(args, repo_root)?;
    if !output.status.success() {
        return Err(gateway_error(args, &output));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command and return true if exit code is 0.
///
/// Swallows errors (both spawn failures and non-zero exits). Use for
/// presence checks only.
pub fn run_git_bool(args: &[&str], repo_root: &Path) -> bool {
    run_git(args, repo_root)
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn gateway_error(args: &[&str], output: &Output) -> DeckError {
    DeckError::Gateway {
        command: args.first().unwrap_or(&"").to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}
