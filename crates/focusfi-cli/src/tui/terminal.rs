//! Raw mode and alternate screen handling.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Puts the terminal into raw mode on the alternate screen and undoes both
/// when dropped, including on early error returns.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = restore(&mut self.out) {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Leave raw mode and the alternate screen, and show the cursor.
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, Show)?;
    raw
}

/// Restore the terminal before the panic message is printed.
/// Release builds abort on panic, so `TerminalGuard` never drops there.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // The process is going down; there is nowhere to report a failure.
        restore(&mut io::stdout()).ok();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_guard_leaves_alternate_screen() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn restore_without_raw_mode_is_harmless() {
        let mut out = Vec::new();
        assert!(restore(&mut out).is_ok());
        assert!(!out.is_empty());
    }
}
