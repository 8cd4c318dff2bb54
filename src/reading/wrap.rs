//! Word wrapping of paragraphs into fixed-width display lines
//!
//! Headings are wrapped flush left. Body paragraphs get an indented first
//! line and flush-left continuation lines. Widths are terminal display
//! columns, so wide characters count double.

use super::paragraph::Paragraph;

/// One display line produced by the wrapper
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WrappedLine {
    pub text: String,
    /// Inherited from the source paragraph.
    pub is_heading: bool,
    /// Index within the full wrapped sequence.
    pub position: usize,
}

/// Wrap every paragraph at `column_width` and flatten the result.
///
/// `column_width` must be positive; very narrow widths produce valid but
/// ugly output, so callers should go through [`super::PageLayout`].
pub fn wrap_paragraphs(
    paragraphs: &[Paragraph],
    column_width: usize,
    indent: usize,
) -> Vec<WrappedLine> {
    let width = column_width.max(1);
    let body_indent = " ".repeat(indent);

    let mut lines = Vec::new();
    for paragraph in paragraphs {
        let first_indent = if paragraph.is_heading() {
            ""
        } else {
            body_indent.as_str()
        };
        let options = textwrap::Options::new(width)
            .initial_indent(first_indent)
            .subsequent_indent("");
        for text in textwrap::wrap(paragraph.text(), &options) {
            lines.push(WrappedLine {
                text: text.into_owned(),
                is_heading: paragraph.is_heading(),
                position: lines.len(),
            });
        }
    }
    lines
}
