//! Deck data model and the pure navigation/edit engine.
//!
//! Everything here is in-memory; persistence lives in `crate::fs::deck_file`.
//! Slide order is significant (it is the presentation sequence) and is never
//! reordered implicitly.

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// On-disk schema version written into every new deck file.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// A named pointer to a commit, one step of the presentation.
///
/// Identity is `name`; the commit reference is opaque and only ever
/// replaced wholesale by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub name: String,
    pub commit: String,
}

/// The ordered slide collection persisted as the presentation's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub version: String,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// A fresh, empty deck at the current schema version.
    pub fn new() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            slides: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the slide named `name`, if any. First match wins.
    ///
    /// A miss is an expected outcome, not an error: the caller simply is not
    /// positioned on any slide.
    pub fn locate(&self, name: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.name == name)
    }

    /// Append a slide at the end of the deck and return its index.
    pub fn push_slide(&mut self, name: &str, commit: &str) -> Result<usize, DeckError> {
        self.ensure_unique(name)?;
        self.slides.push(Slide {
            name: name.to_string(),
            commit: commit.to_string(),
        });
        Ok(self.slides.len() - 1)
    }

    /// Insert a slide right after `index`, or at the front when there is no
    /// current slide. Later slides shift by one. Returns the new index.
    pub fn insert_after(
        &mut self,
        index: Option<usize>,
        name: &str,
        commit: &str,
    ) -> Result<usize, DeckError> {
        self.ensure_unique(name)?;
        let at = match index {
            Some(i) => i + 1,
            None => 0,
        };
        self.slides.insert(
            at,
            Slide {
                name: name.to_string(),
                commit: commit.to_string(),
            },
        );
        Ok(at)
    }

    /// Repoint a slide at a new commit. Always applies; callers that want to
    /// report "already at this commit" diff before calling.
    pub fn set_commit(&mut self, index: usize, commit: &str) {
        self.slides[index].commit = commit.to_string();
    }

    /// Index of the slide after `index`, unless `index` is the last slide.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.slides.len()).then_some(next)
    }

    /// Index of the slide before `index`, unless `index` is the first slide.
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }

    /// Index of the first slide, unless the deck is empty.
    pub fn first_index(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(0)
    }

    fn ensure_unique(&self, name: &str) -> Result<(), DeckError> {
        if self.locate(name).is_some() {
            return Err(DeckError::DuplicateSlide(name.to_string()));
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
