//! `gitdeck init`: create an empty deck file at the repository root.

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::open_repository;
use crate::fs::deck_file::DeckStore;

pub fn execute() -> Result<()> {
    let (root, _gateway) = open_repository()?;

    let store = DeckStore::new(&root);
    store.create()?;

    println!("{} Created {}", "✓".green().bold(), store.path().display());
    Ok(())
}
