//! Typed errors for deck persistence, navigation, and git operations.
//!
//! The one-shot CLI maps every kind to a non-zero exit with a printed
//! message; the interactive session renders recoverable kinds as a
//! feedback line and keeps running.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("not a git repository")]
    NotARepository,

    #[error("repository already has a slide deck file")]
    AlreadyInitialized,

    #[error("current position does not match any slide")]
    NotASlide,

    #[error("slide '{0}' already exists in the deck")]
    DuplicateSlide(String),

    #[error("cannot read deck file {path}: {reason}")]
    CannotRead { path: String, reason: String },

    #[error("cannot write deck file {path}: {reason}")]
    CannotWrite { path: String, reason: String },

    #[error("{0}")]
    EndOfPresentation(&'static str),

    #[error("git {command} failed: {stderr}")]
    Gateway { command: String, stderr: String },

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl DeckError {
    /// Whether the interactive session can show this as a message and
    /// keep running, rather than tearing the session down.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DeckError::NotASlide
                | DeckError::DuplicateSlide(_)
                | DeckError::EndOfPresentation(_)
                | DeckError::Gateway { .. }
        )
    }
}
