// Raw mode + alternate screen for the length of one interactive session

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout};
use std::sync::Once;
use tracing::{debug, warn};

static PANIC_HOOK: Once = Once::new();

/// Holds the terminal. Dropping it puts the terminal back the way it was,
/// on normal return, on `?`, and while unwinding.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        // From here on the guard exists, so a failure below still restores
        let session = TerminalSession { _private: () };
        execute!(stdout(), EnterAlternateScreen)?;
        debug!("terminal session started");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            warn!("failed to restore terminal: {}", e);
        }
        debug!("terminal session ended");
    }
}

fn restore() -> io::Result<()> {
    // Try every step even if an earlier one fails
    let raw = disable_raw_mode();
    let screen = execute!(stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restores the terminal before the default hook prints, so the panic message
/// is readable.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));
    });
}
