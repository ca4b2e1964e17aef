//! One-shot navigation: `next`, `previous`, `first`.
//!
//! Each command stashes uncommitted changes and switches to the target
//! slide's branch. Running off either end of the deck is a distinct error.

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::{open_repository, resolve_current_slide};
use crate::error::DeckError;
use crate::fs::deck_file::DeckStore;
use crate::git::{slide_branch, CheckpointGateway};

pub fn next() -> Result<()> {
    go(Step::Next)
}

pub fn previous() -> Result<()> {
    go(Step::Previous)
}

pub fn first() -> Result<()> {
    go(Step::First)
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Previous,
    First,
}

fn go(step: Step) -> Result<()> {
    let (root, gateway) = open_repository()?;
    let store = DeckStore::new(&root);
    let deck = store.load()?;

    let target = match step {
        Step::First => deck
            .first_index()
            .ok_or(DeckError::EndOfPresentation("the deck has no slides"))?,
        Step::Next => {
            let current = resolve_current_slide(&gateway, &deck)?;
            deck.next_index(current)
                .ok_or(DeckError::EndOfPresentation("already at the last slide"))?
        }
        Step::Previous => {
            let current = resolve_current_slide(&gateway, &deck)?;
            deck.previous_index(current)
                .ok_or(DeckError::EndOfPresentation("already at the first slide"))?
        }
    };

    let slide = &deck.slides[target];
    gateway.save_working_state()?;
    gateway.create_and_switch(&slide_branch(&slide.name), &slide.commit)?;

    let title = gateway.title_of(&slide.commit).unwrap_or_default();
    println!(
        "{} Slide {}/{}: {}{}",
        "✓".green().bold(),
        target + 1,
        deck.len(),
        slide.name.bold(),
        if title.is_empty() {
            String::new()
        } else {
            format!(" ({title})")
        }
    );
    Ok(())
}
