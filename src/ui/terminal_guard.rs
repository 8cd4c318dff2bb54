use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode, alternate screen and hidden cursor for as long as it lives
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        // Constructed before the screen switch so a failure below still
        // leaves raw mode through Drop.
        let guard = TerminalGuard;
        execute!(io::stdout(), terminal::EnterAlternateScreen, Hide)?;

        set_panic_hook();

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = execute!(io::stdout(), Show, terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            restore();
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
