//! Shared helpers for command implementations.

use std::path::PathBuf;

use crate::error::DeckError;
use crate::git::runner::run_git_checked;
use crate::git::{slide_name, CheckpointGateway, GitGateway};
use crate::models::deck::Deck;

/// Locate the repository root from the current directory and build the
/// gateway every command shares.
pub fn open_repository() -> Result<(PathBuf, GitGateway), DeckError> {
    let cwd = std::env::current_dir().map_err(|e| DeckError::Unknown(e.into()))?;
    if !GitGateway::new(&cwd).is_repository() {
        return Err(DeckError::NotARepository);
    }
    let root = PathBuf::from(run_git_checked(&["rev-parse", "--show-toplevel"], &cwd)?);
    let gateway = GitGateway::new(&root);
    Ok((root, gateway))
}

/// Index of the slide the repository is currently positioned on.
///
/// The single place where position is inferred from the checkpoint label:
/// strip the slide prefix from the current branch and look the name up in
/// the deck. Used by every one-shot command and by session startup.
pub fn resolve_current_slide<G: CheckpointGateway>(
    gateway: &G,
    deck: &Deck,
) -> Result<usize, DeckError> {
    let branch = gateway.current_branch()?;
    let name = slide_name(&branch).ok_or(DeckError::NotASlide)?;
    deck.locate(name).ok_or(DeckError::NotASlide)
}
