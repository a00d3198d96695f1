//! Terminal size lookup, used only when a table has no explicit width.

use std::env;

/// Width used when neither the terminal nor `$COLUMNS` report one.
pub const FALLBACK_WIDTH: usize = 80;

pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => env::var("COLUMNS")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(FALLBACK_WIDTH),
    }
}
