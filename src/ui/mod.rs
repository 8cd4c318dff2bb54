pub mod reader;
pub mod screen;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use reader::view::{render, TOO_SMALL_MESSAGE};
pub use screen::{CrosstermScreen, Screen};
pub use terminal::{SessionEnd, TuiManager};
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
