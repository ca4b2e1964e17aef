//! Blocking keypress input for the interactive session.
//!
//! Raw mode is scoped to each read: it is enabled just before waiting and
//! disabled before returning, so rendering and line prompts run in normal
//! cooked mode. The session owns these calls; there is no shared callback
//! state.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::actions::Action;

/// Outcome of waiting for a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keypress {
    Action(Action),
    /// Ctrl+C while waiting; the session treats it like quit.
    Interrupt,
}

/// Block until the user presses a key bound to one of `allowed`.
///
/// Arrow keys alias to previous/next and Esc aliases to quit, when those
/// are allowed. Anything else is ignored.
pub fn read_action(allowed: &[Action]) -> Result<Keypress> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = wait_for_allowed(allowed);
    disable_raw_mode().context("Failed to disable raw mode")?;
    result
}

fn wait_for_allowed(allowed: &[Action]) -> Result<Keypress> {
    loop {
        let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Keypress::Interrupt);
        }

        let action = match key.code {
            KeyCode::Left => Some(Action::Previous),
            KeyCode::Right => Some(Action::Next),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(c) => allowed.iter().copied().find(|a| a.key() == c),
            _ => None,
        };

        if let Some(action) = action {
            if allowed.contains(&action) {
                return Ok(Keypress::Action(action));
            }
        }
    }
}

/// Prompt for a line of input in cooked mode.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}
