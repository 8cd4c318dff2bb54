use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{PageView, RenderState};
use crate::config::ReaderConfig;
use crate::reading::{paginate, wrap_paragraphs, Page, PageLayout, Paragraph};

/// Reader state machine: layout cache, current page and mode
pub struct App {
    paragraphs: Vec<Paragraph>,
    config: ReaderConfig,
    mode: AppMode,
    /// Layout the cached `pages` were built for.
    layout: Option<PageLayout>,
    pages: Vec<Page>,
    current_page: usize,
    layout_passes: usize,
}

impl App {
    /// Start a session at `start_page`, clamped once pages exist.
    ///
    /// The app stays in `TooSmall` until the first [`App::update_size`].
    pub fn new(paragraphs: Vec<Paragraph>, start_page: usize, config: ReaderConfig) -> Self {
        Self {
            paragraphs,
            config,
            mode: AppMode::TooSmall,
            layout: None,
            pages: Vec::new(),
            current_page: start_page,
            layout_passes: 0,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn layout(&self) -> Option<PageLayout> {
        self.layout
    }

    /// Number of re-wrap/re-paginate passes so far.
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// Feed the current terminal size; re-lays out the book when it changed.
    pub fn update_size(&mut self, width: u16, height: u16) {
        if self.mode.is_finished() {
            return;
        }

        match PageLayout::from_terminal(width, height, &self.config.layout) {
            Some(layout) => {
                if self.layout != Some(layout) {
                    self.relayout(layout);
                }
                self.mode = AppMode::Displaying;
            }
            None => {
                if self.mode != AppMode::TooSmall {
                    log::debug!("Terminal {}x{} is too small", width, height);
                }
                self.layout = None;
                self.mode = AppMode::TooSmall;
            }
        }
    }

    fn relayout(&mut self, layout: PageLayout) {
        let lines = wrap_paragraphs(
            &self.paragraphs,
            layout.column_width as usize,
            self.config.wrap.indent,
        );
        self.pages = paginate(lines, layout.lines_per_column as usize);
        self.current_page = self.current_page.min(self.pages.len().saturating_sub(1));
        self.layout = Some(layout);
        self.layout_passes += 1;

        log::debug!(
            "Layout {}x{}: column width {}, {} lines per column, {} pages, on page {}",
            layout.terminal_size.0,
            layout.terminal_size.1,
            layout.column_width,
            layout.lines_per_column,
            self.pages.len(),
            self.current_page + 1
        );
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match (self.mode, event) {
            (mode, AppEvent::Abort) if !mode.is_finished() => {
                self.mode = AppMode::Aborted;
            }
            (AppMode::Displaying, AppEvent::NextPage) => {
                if self.current_page + 1 < self.pages.len() {
                    self.current_page += 1;
                }
            }
            (AppMode::Displaying, AppEvent::PreviousPage) => {
                self.current_page = self.current_page.saturating_sub(1);
            }
            (AppMode::Displaying, AppEvent::Quit) => {
                self.mode = AppMode::Quit;
            }
            _ => {}
        }
    }

    /// Frame contents for the current state.
    pub fn render_state(&self) -> RenderState<'_> {
        match (self.mode, self.layout) {
            (AppMode::TooSmall, _) | (_, None) => RenderState::TooSmall,
            (_, Some(layout)) => RenderState::Page(PageView {
                layout,
                page: self.pages.get(self.current_page),
                current_page: self.current_page,
                total_pages: self.pages.len(),
            }),
        }
    }
}
