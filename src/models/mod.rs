pub mod deck;

pub use deck::{Deck, Slide, SCHEMA_VERSION};
