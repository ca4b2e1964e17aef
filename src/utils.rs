use std::io::{self, Write};
use std::sync::Once;

/// ANSI escape codes for terminal control
const CURSOR_SHOW: &str = "\x1B[?25h";
const ATTR_RESET: &str = "\x1B[0m";
const CLEAR_LINE: &str = "\r\x1B[K";

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Restore terminal to a clean state: clear the current line, show the
/// cursor, reset attributes, move to a fresh line. Best effort.
pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let cleanup = format!("{CLEAR_LINE}{CURSOR_SHOW}{ATTR_RESET}\n");
    let _ = stdout.write_all(cleanup.as_bytes());
    let _ = stdout.flush();
}

/// Install a panic hook that disables raw mode and restores terminal state
/// before the default handler runs. Safe to call multiple times.
pub fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = crossterm::terminal::disable_raw_mode();
            cleanup_terminal();
            default_hook(panic_info);
        }));
    });
}

/// Shorten a commit hash for display.
pub fn short_commit(commit: &str) -> &str {
    &commit[..commit.len().min(7)]
}
