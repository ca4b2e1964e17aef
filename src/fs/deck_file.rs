//! Deck file I/O
//!
//! The deck lives in a single JSON document at the repository root. Saves go
//! through a temp file in the same directory and rename into place, so an
//! interrupted write never leaves a corrupt deck behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::DeckError;
use crate::models::deck::Deck;

/// Well-known deck file name, relative to the repository root.
pub const DECK_FILE_NAME: &str = ".slide-deck.json";

pub struct DeckStore {
    path: PathBuf,
}

impl DeckStore {
    pub fn new(repo_root: &Path) -> Self {
        Self {
            path: repo_root.join(DECK_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the deck. A missing file, an unreadable file, and a schema
    /// mismatch all collapse into [`DeckError::CannotRead`].
    pub fn load(&self) -> Result<Deck, DeckError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.cannot_read(e))?;
        let deck: Deck = serde_json::from_str(&content).map_err(|e| self.cannot_read(e))?;
        debug!(path = %self.path.display(), slides = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// Write a fresh empty deck. Fails if one already exists.
    pub fn create(&self) -> Result<Deck, DeckError> {
        if self.exists() {
            return Err(DeckError::AlreadyInitialized);
        }
        let deck = Deck::new();
        self.save(&deck)?;
        Ok(deck)
    }

    /// Persist the deck, fully replacing the previous contents.
    pub fn save(&self, deck: &Deck) -> Result<(), DeckError> {
        let json = serde_json::to_string_pretty(deck).map_err(|e| self.cannot_write(e))?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.cannot_write(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.write_all(b"\n"))
            .map_err(|e| self.cannot_write(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.cannot_write(e.error))?;

        debug!(path = %self.path.display(), slides = deck.len(), "saved deck");
        Ok(())
    }

    fn cannot_read(&self, err: impl std::fmt::Display) -> DeckError {
        DeckError::CannotRead {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }

    fn cannot_write(&self, err: impl std::fmt::Display) -> DeckError {
        DeckError::CannotWrite {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}
