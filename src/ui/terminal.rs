use crate::app::{App, AppEvent, AppMode};
use crate::error::ReaderError;
use crate::storage::{ReaderState, StateStore};
use crate::ui::screen::Screen;

/// How a reading session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Quit key: `page` was written to the store.
    Saved { page: usize },
    /// Interrupted: the store was not touched.
    Aborted { page: usize },
}

/// Drives the blocking draw / read-key loop of a reader session
pub struct TuiManager<S: Screen> {
    screen: S,
}

impl<S: Screen> TuiManager<S> {
    pub fn new(screen: S) -> Self {
        TuiManager { screen }
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Run until the app quits or is aborted.
    ///
    /// The terminal size is polled before every frame, so a resize shows up
    /// on the first redraw after the next key press. On quit the current
    /// page is stored under `book_id` and the whole `state` is saved once.
    pub fn run_event_loop<T: StateStore + ?Sized>(
        &mut self,
        app: &mut App,
        store: &T,
        state: &mut ReaderState,
        book_id: &str,
    ) -> Result<SessionEnd, ReaderError> {
        loop {
            let (width, height) = self.screen.size()?;
            app.update_size(width, height);
            self.screen.draw(&app.render_state())?;

            let key = self.screen.read_key()?;
            let event = AppEvent::from_key(&key, &app.config().keys);
            app.handle_event(event);

            match app.mode() {
                AppMode::Quit => {
                    let page = app.current_page();
                    state.insert(book_id.to_string(), page);
                    store.save(state)?;
                    log::info!("Saved {} at page {}", book_id, page + 1);
                    return Ok(SessionEnd::Saved { page });
                }
                AppMode::Aborted => {
                    log::info!("Interrupted on page {}; position not saved", app.current_page() + 1);
                    return Ok(SessionEnd::Aborted {
                        page: app.current_page(),
                    });
                }
                AppMode::Displaying | AppMode::TooSmall => {
                    if event != AppEvent::None {
                        log::debug!("{:?} -> page {}", event, app.current_page() + 1);
                    }
                }
            }
        }
    }
}
