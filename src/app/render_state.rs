use crate::reading::{Page, PageLayout};

/// What the screen should show for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState<'a> {
    TooSmall,
    Page(PageView<'a>),
}

/// One page together with the geometry it was laid out for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a> {
    pub layout: PageLayout,
    /// `None` only for a book without lines.
    pub page: Option<&'a Page>,
    /// Zero-based.
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageView<'_> {
    /// Page indicator text, 1-based.
    pub fn indicator(&self) -> String {
        format!("стр. {} / {}", self.current_page + 1, self.total_pages)
    }
}
