//! Deck flows wired through real repositories: init, add, update, navigation.

use gitdeck::commands::common::resolve_current_slide;
use gitdeck::error::DeckError;
use gitdeck::fs::deck_file::DeckStore;
use gitdeck::fs::locking::SessionLock;
use gitdeck::git::{slide_branch, CheckpointGateway, GitGateway};
use gitdeck::models::deck::Deck;

use crate::helpers::{commit_file, create_temp_git_repo};

/// The `add` sequence: branch confirmed by the gateway first, deck
/// persisted after.
fn add_slide(
    gateway: &GitGateway,
    store: &DeckStore,
    deck: &mut Deck,
    name: &str,
) -> Result<usize, DeckError> {
    let commit = gateway.current_commit()?;
    let index = deck.push_slide(name, &commit)?;
    gateway.create_and_switch(&slide_branch(name), &commit)?;
    store.save(deck)?;
    Ok(index)
}

#[test]
fn test_init_then_reinit_fails() {
    let repo = create_temp_git_repo().unwrap();
    let store = DeckStore::new(repo.path());

    store.create().unwrap();
    assert!(store.exists());

    let err = store.create().unwrap_err();
    assert!(matches!(err, DeckError::AlreadyInitialized));
}

#[test]
fn test_add_switches_to_slide_branch_and_persists() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());
    let store = DeckStore::new(repo.path());
    let mut deck = store.create().unwrap();

    let index = add_slide(&gateway, &store, &mut deck, "intro").unwrap();
    assert_eq!(index, 0);
    assert_eq!(gateway.current_branch().unwrap(), "slide-intro");

    let loaded = store.load().unwrap();
    assert_eq!(loaded.slides.len(), 1);
    assert_eq!(loaded.slides[0].name, "intro");
    assert_eq!(loaded.slides[0].commit, gateway.current_commit().unwrap());
}

#[test]
fn test_resolve_current_slide_follows_checkouts() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());
    let store = DeckStore::new(repo.path());
    let mut deck = store.create().unwrap();

    add_slide(&gateway, &store, &mut deck, "intro").unwrap();
    commit_file(repo.path(), "demo.txt", "demo", "Add demo").unwrap();
    add_slide(&gateway, &store, &mut deck, "demo").unwrap();

    assert_eq!(resolve_current_slide(&gateway, &deck).unwrap(), 1);

    gateway.switch_to("slide-intro").unwrap();
    assert_eq!(resolve_current_slide(&gateway, &deck).unwrap(), 0);
}

#[test]
fn test_navigation_walks_the_deck_in_order() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());
    let store = DeckStore::new(repo.path());
    let mut deck = store.create().unwrap();

    let c1 = gateway.current_commit().unwrap();
    add_slide(&gateway, &store, &mut deck, "intro").unwrap();
    let c2 = commit_file(repo.path(), "demo.txt", "demo", "Add demo").unwrap();
    add_slide(&gateway, &store, &mut deck, "demo").unwrap();

    // From intro, next resolves to demo.
    gateway.switch_to("slide-intro").unwrap();
    let current = resolve_current_slide(&gateway, &deck).unwrap();
    let next = deck.next_index(current).unwrap();
    assert_eq!(deck.slides[next].name, "demo");
    assert_eq!(deck.slides[next].commit, c2);

    gateway
        .create_and_switch(&slide_branch(&deck.slides[next].name), &deck.slides[next].commit)
        .unwrap();
    assert_eq!(gateway.current_commit().unwrap(), c2);

    // From demo, the deck ends.
    let current = resolve_current_slide(&gateway, &deck).unwrap();
    assert_eq!(deck.next_index(current), None);

    // And previous walks back to intro at c1.
    let previous = deck.previous_index(current).unwrap();
    assert_eq!(deck.slides[previous].commit, c1);
}

#[test]
fn test_update_repoints_only_the_current_slide() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());
    let store = DeckStore::new(repo.path());
    let mut deck = store.create().unwrap();

    let c1 = gateway.current_commit().unwrap();
    add_slide(&gateway, &store, &mut deck, "intro").unwrap();
    commit_file(repo.path(), "demo.txt", "demo", "Add demo").unwrap();
    add_slide(&gateway, &store, &mut deck, "demo").unwrap();

    // A new commit lands while positioned on slide-demo.
    let c4 = commit_file(repo.path(), "demo.txt", "demo v2", "Polish demo").unwrap();

    let index = resolve_current_slide(&gateway, &deck).unwrap();
    deck.set_commit(index, &c4);
    store.save(&deck).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.slides[1].commit, c4);
    assert_eq!(loaded.slides[0].name, "intro");
    assert_eq!(loaded.slides[0].commit, c1);
}

#[test]
fn test_update_off_slide_is_not_a_slide_and_writes_nothing() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());
    let store = DeckStore::new(repo.path());
    let mut deck = store.create().unwrap();

    add_slide(&gateway, &store, &mut deck, "intro").unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    // Move off the slide branch entirely.
    let origin = commit_file(repo.path(), "x.txt", "x", "Off-deck commit").unwrap();
    gateway.switch_detached(&origin).unwrap();

    let err = resolve_current_slide(&gateway, &deck).unwrap_err();
    assert!(matches!(err, DeckError::NotASlide));

    let after = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_duplicate_add_leaves_deck_untouched() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());
    let store = DeckStore::new(repo.path());
    let mut deck = store.create().unwrap();

    add_slide(&gateway, &store, &mut deck, "intro").unwrap();
    let err = add_slide(&gateway, &store, &mut deck, "intro").unwrap_err();
    assert!(matches!(err, DeckError::DuplicateSlide(_)));

    let loaded = store.load().unwrap();
    assert_eq!(loaded.slides.len(), 1);
}

#[test]
fn test_session_lock_is_exclusive_per_repository() {
    let repo = create_temp_git_repo().unwrap();

    let lock = SessionLock::acquire(repo.path()).unwrap();
    assert!(SessionLock::acquire(repo.path()).is_err());

    drop(lock);
    assert!(SessionLock::acquire(repo.path()).is_ok());
}
