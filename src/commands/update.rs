//! `gitdeck update`: repoint the current slide at the current commit.

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::{open_repository, resolve_current_slide};
use crate::fs::deck_file::DeckStore;
use crate::git::CheckpointGateway;

pub fn execute() -> Result<()> {
    let (root, gateway) = open_repository()?;
    let store = DeckStore::new(&root);
    let mut deck = store.load()?;

    let index = resolve_current_slide(&gateway, &deck)?;
    let commit = gateway.current_commit()?;

    if deck.slides[index].commit == commit {
        println!(
            "Slide '{}' is already at this commit",
            deck.slides[index].name
        );
        return Ok(());
    }

    deck.set_commit(index, &commit);
    store.save(&deck)?;

    println!(
        "{} Updated slide '{}'",
        "✓".green().bold(),
        deck.slides[index].name.bold()
    );
    Ok(())
}
