//! Deck persistence and session locking.

pub mod deck_file;
pub mod locking;

pub use deck_file::{DeckStore, DECK_FILE_NAME};
pub use locking::SessionLock;
