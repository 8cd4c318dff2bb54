use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fb2_reader::app::RenderState;
use fb2_reader::ui::{render, Screen, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::io;

/// Scripted input for the fake screen
#[derive(Debug, Clone)]
pub enum Step {
    Key(KeyEvent),
    /// Terminal resized while waiting for a key.
    Resize(u16, u16),
}

/// Screen without a TTY: frames go into buffers, keys come from a script
pub struct FakeScreen {
    size: (u16, u16),
    steps: VecDeque<Step>,
    theme: Theme,
    pub frames: Vec<Buffer>,
}

impl FakeScreen {
    pub fn new(width: u16, height: u16, steps: Vec<Step>) -> Self {
        Self {
            size: (width, height),
            steps: steps.into(),
            theme: Theme::default(),
            frames: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn last_frame(&self) -> &Buffer {
        self.frames.last().expect("nothing drawn yet")
    }
}

impl Screen for FakeScreen {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn draw(&mut self, state: &RenderState<'_>) -> io::Result<()> {
        let area = Rect::new(0, 0, self.size.0, self.size.1);
        let mut buf = Buffer::empty(area);
        render(state, area, &mut buf, &self.theme);
        self.frames.push(buf);
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            match self.steps.pop_front() {
                Some(Step::Key(key)) => return Ok(key),
                Some(Step::Resize(width, height)) => self.size = (width, height),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "key script exhausted",
                    ))
                }
            }
        }
    }
}

/// Row `y` of `buf` between columns `from` and `to`.
pub fn row_text(buf: &Buffer, y: u16, from: u16, to: u16) -> String {
    (from..to).map(|x| buf[(x, y)].symbol()).collect()
}

pub mod keys {
    use super::*;

    pub fn right() -> Step {
        Step::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))
    }

    pub fn left() -> Step {
        Step::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE))
    }

    pub fn char(c: char) -> Step {
        Step::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    pub fn ctrl_c() -> Step {
        Step::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
    }
}
