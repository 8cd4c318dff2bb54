use crate::app::RenderState;
use crate::ui::reader::view;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Terminal capabilities the reader loop needs
pub trait Screen {
    /// Current size in cells as (columns, rows).
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// Replace the screen contents with one frame.
    fn draw(&mut self, state: &RenderState<'_>) -> io::Result<()>;

    /// Block until a key is pressed. Other terminal events are skipped.
    fn read_key(&mut self) -> io::Result<KeyEvent>;
}

/// Full-screen crossterm terminal, restored when dropped
pub struct CrosstermScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    _guard: TerminalGuard,
}

impl CrosstermScreen {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(CrosstermScreen {
            terminal,
            theme,
            _guard: guard,
        })
    }
}

impl Screen for CrosstermScreen {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn draw(&mut self, state: &RenderState<'_>) -> io::Result<()> {
        let theme = self.theme;
        self.terminal.draw(|frame| {
            let area = frame.area();
            view::render(state, area, frame.buffer_mut(), &theme);
        })?;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }
}
