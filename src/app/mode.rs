/// States of the reader session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Showing the current page.
    Displaying,
    /// Terminal below the minimum size, or not measured yet.
    TooSmall,
    /// Quit key pressed; the position must be saved.
    Quit,
    /// Interrupted; the position is not saved.
    Aborted,
}

impl AppMode {
    pub fn is_finished(self) -> bool {
        matches!(self, AppMode::Quit | AppMode::Aborted)
    }
}
