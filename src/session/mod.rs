//! Interactive presentation/editing session.
//!
//! One loop per run: switch to the target slide, render the step, wait for
//! a key, dispatch. The origin checkpoint is restored on every exit path,
//! including Ctrl+C.

pub mod actions;
pub mod input;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::common::resolve_current_slide;
use crate::error::DeckError;
use crate::fs::deck_file::DeckStore;
use crate::fs::locking::SessionLock;
use crate::git::{slide_branch, CheckpointGateway, GitGateway};
use crate::models::deck::Deck;
use crate::session::actions::{available_actions, Action, ActionContext};
use crate::session::input::{prompt_line, read_action, Keypress};
use crate::utils::short_commit;
use crate::validation::validate_slide_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Read-only navigation: previous, next, quit.
    Presenter,
    /// Navigation plus deck edits.
    Editor,
}

/// Where the session started, so it can put the user back on exit.
#[derive(Debug, Clone)]
enum Origin {
    Branch(String),
    Detached(String),
}

pub struct Session {
    repo_root: PathBuf,
    gateway: GitGateway,
    store: DeckStore,
    deck: Deck,
    index: usize,
    origin: Origin,
    mode: SessionMode,
    pending_message: Option<String>,
    stashed: Arc<AtomicBool>,
    dirty: bool,
    _lock: SessionLock,
}

impl Session {
    /// Open a session over the repository's deck.
    ///
    /// Presenter sessions start from the first slide; editor sessions start
    /// from the slide the repository is currently on, falling back to the
    /// first. Fails when the deck is empty.
    pub fn open(repo_root: &Path, mode: SessionMode) -> Result<Self> {
        let gateway = GitGateway::new(repo_root);
        let store = DeckStore::new(repo_root);
        let deck = store.load()?;

        let index = match mode {
            SessionMode::Presenter => deck.first_index(),
            SessionMode::Editor => resolve_current_slide(&gateway, &deck)
                .ok()
                .or_else(|| deck.first_index()),
        }
        .ok_or(DeckError::EndOfPresentation("the deck has no slides"))?;

        let lock = SessionLock::acquire(repo_root)?;
        let origin = resolve_origin(&gateway)?;

        Ok(Self {
            repo_root: repo_root.to_path_buf(),
            gateway,
            store,
            deck,
            index,
            origin,
            mode,
            pending_message: None,
            stashed: Arc::new(AtomicBool::new(false)),
            dirty: false,
            _lock: lock,
        })
    }

    /// Run the session loop, then restore the origin checkpoint.
    pub fn run(mut self) -> Result<()> {
        crate::utils::install_terminal_panic_hook();
        self.install_interrupt_handler()?;

        let result = self.run_loop();
        let restored = self.restore_origin();
        result.and(restored)
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            if let Err(err) = self.enter_slide() {
                if !err.is_recoverable() {
                    return Err(err.into());
                }
                // A failed switch keeps the session alive with a message.
                self.pending_message = Some(err.to_string());
            }
            self.render();

            let ctx = self.action_context();
            let allowed = available_actions(&ctx);

            match read_action(&allowed)? {
                Keypress::Interrupt | Keypress::Action(Action::Quit) => {
                    if self.dirty {
                        println!("{} Unsaved deck changes discarded", "!".yellow().bold());
                    }
                    return Ok(());
                }
                Keypress::Action(Action::SaveQuit) => {
                    self.store.save(&self.deck)?;
                    println!("{} Deck saved", "✓".green().bold());
                    return Ok(());
                }
                Keypress::Action(Action::Previous) => {
                    if let Some(i) = self.deck.previous_index(self.index) {
                        self.index = i;
                    }
                }
                Keypress::Action(Action::Next) => {
                    if let Some(i) = self.deck.next_index(self.index) {
                        self.index = i;
                    }
                }
                Keypress::Action(Action::Update) => self.update_current_slide(),
                Keypress::Action(Action::Insert) => self.insert_slide()?,
            }
        }
    }

    /// Step 1 of the per-step protocol: save working state (presenter only),
    /// then switch to the slide the session is pointing at.
    fn enter_slide(&mut self) -> Result<(), DeckError> {
        let slide = &self.deck.slides[self.index];
        if self.mode == SessionMode::Presenter && self.gateway.save_working_state()? {
            self.stashed.store(true, Ordering::SeqCst);
        }
        self.gateway
            .create_and_switch(&slide_branch(&slide.name), &slide.commit)
    }

    fn render(&mut self) {
        let slide = &self.deck.slides[self.index];
        let title = self.gateway.title_of(&slide.commit).unwrap_or_default();

        println!();
        println!("{}", "────────────────────────────────────────".dimmed());
        println!(
            " Slide {}/{}: {}  {}",
            self.index + 1,
            self.deck.len(),
            slide.name.bold(),
            format!("({})", short_commit(&slide.commit)).dimmed()
        );
        if !title.is_empty() {
            println!(" {title}");
        }
        if let Some(message) = self.pending_message.take() {
            println!(" {} {message}", "!".yellow().bold());
        }

        let bindings: Vec<String> = available_actions(&self.action_context())
            .iter()
            .map(|a| format!("[{}] {}", a.key().to_string().cyan(), a.label()))
            .collect();
        println!(" {}", bindings.join("  "));
    }

    fn update_current_slide(&mut self) {
        let commit = match self.gateway.current_commit() {
            Ok(commit) => commit,
            Err(err) => {
                self.pending_message = Some(err.to_string());
                return;
            }
        };

        let slide = &self.deck.slides[self.index];
        if slide.commit == commit {
            self.pending_message = Some(format!("slide '{}' is already at this commit", slide.name));
            return;
        }

        let name = slide.name.clone();
        self.deck.set_commit(self.index, &commit);
        self.dirty = true;
        self.pending_message = Some(format!("updated slide '{name}'"));
    }

    fn insert_slide(&mut self) -> Result<()> {
        let name = prompt_line("New slide name: ")?;
        if let Err(err) = validate_slide_name(&name) {
            self.pending_message = Some(err.to_string());
            return Ok(());
        }
        if self.deck.locate(&name).is_some() {
            self.pending_message = Some(DeckError::DuplicateSlide(name).to_string());
            return Ok(());
        }

        let commit = match self.gateway.current_commit() {
            Ok(commit) => commit,
            Err(err) => {
                self.pending_message = Some(err.to_string());
                return Ok(());
            }
        };

        // Branch first; the deck only ever records slides whose branch the
        // gateway has confirmed.
        if let Err(err) = self.gateway.create_and_switch(&slide_branch(&name), &commit) {
            self.pending_message = Some(err.to_string());
            return Ok(());
        }

        match self.deck.insert_after(Some(self.index), &name, &commit) {
            Ok(new_index) => {
                self.index = new_index;
                self.dirty = true;
                self.pending_message = Some(format!("added slide '{name}'"));
            }
            Err(err) => self.pending_message = Some(err.to_string()),
        }
        Ok(())
    }

    fn action_context(&self) -> ActionContext {
        ActionContext {
            index: self.index,
            slide_count: self.deck.len(),
            mode: self.mode,
        }
    }

    /// Put the user back where the session started and hand back any
    /// working state this session stashed.
    fn restore_origin(&self) -> Result<()> {
        match &self.origin {
            Origin::Branch(branch) => self.gateway.switch_to(branch)?,
            Origin::Detached(commit) => self.gateway.switch_detached(commit)?,
        }
        if self.stashed.swap(false, Ordering::SeqCst) {
            self.gateway.restore_working_state()?;
        }
        Ok(())
    }

    /// Ctrl+C outside a raw-mode read: best-effort restore, then exit
    /// non-zero. Inside a raw-mode read Ctrl+C arrives as a key event and
    /// takes the normal quit path instead.
    fn install_interrupt_handler(&self) -> Result<()> {
        let repo_root = self.repo_root.clone();
        let origin = self.origin.clone();
        let stashed = self.stashed.clone();

        ctrlc::set_handler(move || {
            let _ = crossterm::terminal::disable_raw_mode();
            crate::utils::cleanup_terminal();

            let gateway = GitGateway::new(&repo_root);
            let switched = match &origin {
                Origin::Branch(branch) => gateway.switch_to(branch),
                Origin::Detached(commit) => gateway.switch_detached(commit),
            };
            if switched.is_ok() && stashed.load(Ordering::SeqCst) {
                let _ = gateway.restore_working_state();
            }
            eprintln!("Interrupted; restored starting checkpoint");
            std::process::exit(1);
        })
        .context("Failed to set Ctrl+C handler")?;
        Ok(())
    }
}

fn resolve_origin(gateway: &GitGateway) -> Result<Origin, DeckError> {
    let branch = gateway.current_branch()?;
    if branch == "HEAD" {
        Ok(Origin::Detached(gateway.current_commit()?))
    } else {
        Ok(Origin::Branch(branch))
    }
}
