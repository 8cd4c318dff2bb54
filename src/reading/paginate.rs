use super::wrap::WrappedLine;

/// A two-column page
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Page {
    pub left: Vec<WrappedLine>,
    /// Shorter than `left`, or empty, only on the last page.
    pub right: Vec<WrappedLine>,
}

impl Page {
    /// Lines in reading order: left column, then right column.
    pub fn lines(&self) -> impl Iterator<Item = &WrappedLine> {
        self.left.iter().chain(self.right.iter())
    }
}

/// Group lines into pages of `2 * lines_per_column` lines.
///
/// Lossless: chaining [`Page::lines`] over the result gives back `lines`.
pub fn paginate(lines: Vec<WrappedLine>, lines_per_column: usize) -> Vec<Page> {
    if lines_per_column == 0 {
        return Vec::new();
    }

    let mut pages = Vec::with_capacity(page_count(lines.len(), lines_per_column));
    let mut lines = lines.into_iter().peekable();
    while lines.peek().is_some() {
        let left = lines.by_ref().take(lines_per_column).collect();
        let right = lines.by_ref().take(lines_per_column).collect();
        pages.push(Page { left, right });
    }
    pages
}

/// Number of pages `paginate` produces for `line_count` lines.
pub fn page_count(line_count: usize, lines_per_column: usize) -> usize {
    if lines_per_column == 0 {
        return 0;
    }
    line_count.div_ceil(2 * lines_per_column)
}
