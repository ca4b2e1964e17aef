//! Session actions: the ordered list of things a keypress can do.
//!
//! Each action carries a key binding, a label, and an availability predicate
//! over the current session state. Rendering shows only available actions
//! and input matching is restricted to their keys.

use crate::session::SessionMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    Update,
    Insert,
    SaveQuit,
    Quit,
}

/// Render and dispatch order of the action list.
pub const ALL_ACTIONS: [Action; 6] = [
    Action::Previous,
    Action::Next,
    Action::Update,
    Action::Insert,
    Action::SaveQuit,
    Action::Quit,
];

/// The slice of session state availability predicates can see.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    pub index: usize,
    pub slide_count: usize,
    pub mode: SessionMode,
}

impl Action {
    pub fn key(self) -> char {
        match self {
            Action::Previous => 'p',
            Action::Next => 'n',
            Action::Update => 'u',
            Action::Insert => 'a',
            Action::SaveQuit => 's',
            Action::Quit => 'q',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Previous => "previous",
            Action::Next => "next",
            Action::Update => "update slide",
            Action::Insert => "add slide after",
            Action::SaveQuit => "save & quit",
            Action::Quit => "quit",
        }
    }

    /// Whether the action is available in the given session state.
    pub fn is_available(self, ctx: &ActionContext) -> bool {
        match self {
            Action::Previous => ctx.index > 0,
            Action::Next => ctx.index + 1 < ctx.slide_count,
            Action::Update | Action::Insert | Action::SaveQuit => ctx.mode == SessionMode::Editor,
            Action::Quit => true,
        }
    }
}

/// Actions available right now, in render order.
pub fn available_actions(ctx: &ActionContext) -> Vec<Action> {
    ALL_ACTIONS
        .iter()
        .copied()
        .filter(|action| action.is_available(ctx))
        .collect()
}
