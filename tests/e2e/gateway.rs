//! GitGateway contract behavior against real repositories.

use gitdeck::git::{CheckpointGateway, GitGateway};
use tempfile::TempDir;

use crate::helpers::{commit_file, create_temp_git_repo, git};

#[test]
fn test_is_repository() {
    let repo = create_temp_git_repo().unwrap();
    assert!(GitGateway::new(repo.path()).is_repository());

    let plain = TempDir::new().unwrap();
    assert!(!GitGateway::new(plain.path()).is_repository());
}

#[test]
fn test_current_commit_and_branch() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());

    let commit = gateway.current_commit().unwrap();
    assert_eq!(commit, git(&["rev-parse", "HEAD"], repo.path()).unwrap());

    let branch = gateway.current_branch().unwrap();
    assert_eq!(
        branch,
        git(&["rev-parse", "--abbrev-ref", "HEAD"], repo.path()).unwrap()
    );
}

#[test]
fn test_create_and_switch_moves_to_branch_at_commit() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());

    let first = gateway.current_commit().unwrap();
    let second = commit_file(repo.path(), "a.txt", "a", "Second commit").unwrap();

    gateway.create_and_switch("slide-intro", &first).unwrap();
    assert_eq!(gateway.current_branch().unwrap(), "slide-intro");
    assert_eq!(gateway.current_commit().unwrap(), first);

    // Idempotent: re-creating moves the branch rather than failing.
    gateway.create_and_switch("slide-intro", &second).unwrap();
    assert_eq!(gateway.current_branch().unwrap(), "slide-intro");
    assert_eq!(gateway.current_commit().unwrap(), second);
}

#[test]
fn test_switch_to_missing_branch_fails() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());

    assert!(gateway.switch_to("no-such-branch").is_err());
}

#[test]
fn test_switch_detached() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());

    let commit = gateway.current_commit().unwrap();
    gateway.switch_detached(&commit).unwrap();

    assert_eq!(gateway.current_branch().unwrap(), "HEAD");
    assert_eq!(gateway.current_commit().unwrap(), commit);
}

#[test]
fn test_save_working_state_reports_whether_it_stashed() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());

    // Clean tree: nothing to save, and that is not an error.
    assert!(!gateway.save_working_state().unwrap());

    std::fs::write(repo.path().join("README.md"), "# changed\n").unwrap();
    assert!(gateway.save_working_state().unwrap());

    // The modification is parked, not lost.
    let content = std::fs::read_to_string(repo.path().join("README.md")).unwrap();
    assert_eq!(content, "# Test Repository\n");

    gateway.restore_working_state().unwrap();
    let content = std::fs::read_to_string(repo.path().join("README.md")).unwrap();
    assert_eq!(content, "# changed\n");
}

#[test]
fn test_save_working_state_includes_untracked_files() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());

    std::fs::write(repo.path().join("scratch.txt"), "wip").unwrap();
    assert!(gateway.save_working_state().unwrap());
    assert!(!repo.path().join("scratch.txt").exists());

    gateway.restore_working_state().unwrap();
    assert!(repo.path().join("scratch.txt").exists());
}

#[test]
fn test_title_of_returns_commit_subject() {
    let repo = create_temp_git_repo().unwrap();
    let gateway = GitGateway::new(repo.path());

    let commit = commit_file(repo.path(), "b.txt", "b", "Add demo endpoint").unwrap();
    assert_eq!(gateway.title_of(&commit).unwrap(), "Add demo endpoint");
}
