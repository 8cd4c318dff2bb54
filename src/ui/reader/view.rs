//! Drawing of reader frames into a ratatui buffer
//!
//! Everything is placed at absolute cell positions computed by
//! [`PageLayout`](crate::reading::PageLayout); no ratatui layout or widgets
//! are involved, so a frame depends only on the render state.

use crate::app::{PageView, RenderState};
use crate::reading::WrappedLine;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

pub const TOO_SMALL_MESSAGE: &str = "Слишком маленькое окно.";

/// Draw one frame of `state` into `area`.
pub fn render(state: &RenderState<'_>, area: Rect, buf: &mut Buffer, theme: &Theme) {
    match state {
        RenderState::TooSmall => render_too_small(area, buf, theme),
        RenderState::Page(view) => render_page(view, area, buf, theme),
    }
}

pub fn render_too_small(area: Rect, buf: &mut Buffer, theme: &Theme) {
    put(buf, area, 0, 0, TOO_SMALL_MESSAGE, area.width, theme.text_style());
}

pub fn render_page(view: &PageView<'_>, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let layout = view.layout;

    if let Some(page) = view.page {
        render_column(&page.left, layout.left_padding, layout.top_padding, layout.column_width, area, buf, theme);
        render_column(&page.right, layout.right_column_x(), layout.top_padding, layout.column_width, area, buf, theme);
    }

    render_page_indicator(view, area, buf, theme);
}

/// Lines wider than `width` are cut at the column edge.
fn render_column(
    lines: &[WrappedLine],
    x: u16,
    top: u16,
    width: u16,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) {
    for (row, line) in lines.iter().enumerate() {
        let style = if line.is_heading {
            theme.heading_style()
        } else {
            theme.text_style()
        };
        let y = top.saturating_add(row as u16);
        put(buf, area, x, y, &line.text, width, style);
    }
}

/// "стр. N / M" on the last row, `indicator_margin` cells from the right edge.
fn render_page_indicator(view: &PageView<'_>, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let text = view.indicator();
    let (width, height) = view.layout.terminal_size;
    let margin = view.layout.indicator_margin;
    let x = width.saturating_sub(text.width() as u16).saturating_sub(margin);
    let y = height.saturating_sub(1);
    put(buf, area, x, y, &text, width, theme.text_style());
}

/// Write `text` at (`x`, `y`) relative to `area`, clipped to `max_width`
/// cells and to the area itself.
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, max_width: u16, style: Style) {
    if x >= area.width || y >= area.height {
        return;
    }
    let room = max_width.min(area.width - x);
    buf.set_stringn(area.x + x, area.y + y, text, room as usize, style);
}
