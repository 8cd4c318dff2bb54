use ratatui::style::{Color, Modifier, Style};

/// Reader colors: body text and headings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub heading: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}

impl Theme {
    /// White body text, bold cyan headings, terminal background
    pub fn classic() -> Self {
        Self {
            text: Color::White,
            heading: Color::Cyan,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }
}
