//! Page geometry derived from the terminal size
//!
//! The text area is split into two equal columns:
//!
//! ```text
//! column_width     = (width - left_padding - column_spacing) / 2
//! lines_per_column = height - top_padding - bottom_padding
//! ```
//!
//! Terminals below the configured minimum get no layout at all.

use crate::config::LayoutConfig;

/// Geometry of one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageLayout {
    /// Terminal size in cells (columns, rows)
    pub terminal_size: (u16, u16),
    pub column_width: u16,
    pub lines_per_column: u16,
    pub top_padding: u16,
    pub left_padding: u16,
    pub column_spacing: u16,
    /// Gap between the page indicator and the right edge.
    pub indicator_margin: u16,
}

impl PageLayout {
    /// Compute the layout for a `width` x `height` terminal.
    ///
    /// Returns `None` when the terminal is smaller than the configured
    /// minimum or the paddings leave no room for text.
    pub fn from_terminal(width: u16, height: u16, config: &LayoutConfig) -> Option<Self> {
        if width < config.min_width || height < config.min_height {
            return None;
        }

        let column_width = width
            .checked_sub(config.left_padding)?
            .checked_sub(config.column_spacing)?
            / 2;
        let lines_per_column = height
            .checked_sub(config.top_padding)?
            .checked_sub(config.bottom_padding)?;
        if column_width == 0 || lines_per_column == 0 {
            return None;
        }

        Some(Self {
            terminal_size: (width, height),
            column_width,
            lines_per_column,
            top_padding: config.top_padding,
            left_padding: config.left_padding,
            column_spacing: config.column_spacing,
            indicator_margin: config.indicator_margin,
        })
    }

    /// Column where the right text column starts.
    pub fn right_column_x(&self) -> u16 {
        self.left_padding + self.column_width + self.column_spacing
    }
}
