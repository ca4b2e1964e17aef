//! `gitdeck add <name>`: record the current commit as a new slide.

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::open_repository;
use crate::fs::deck_file::DeckStore;
use crate::git::{slide_branch, CheckpointGateway};

pub fn execute(name: String) -> Result<()> {
    let (root, gateway) = open_repository()?;
    let store = DeckStore::new(&root);
    let mut deck = store.load()?;

    let commit = gateway.current_commit()?;
    let index = deck.push_slide(&name, &commit)?;

    // Branch first; the deck file only records slides whose branch the
    // gateway has confirmed.
    gateway.create_and_switch(&slide_branch(&name), &commit)?;
    store.save(&deck)?;

    println!(
        "{} Added slide '{}' ({} of {})",
        "✓".green().bold(),
        name.bold(),
        index + 1,
        deck.len()
    );
    Ok(())
}
