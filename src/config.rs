// Configuration for the reader layout, wrapping and key bindings
// Defaults reproduce the classic curses layout of the reader

/// Screen layout configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Empty rows above the text (default 1)
    pub top_padding: u16,

    /// Rows reserved below the text, used by the page indicator (default 1)
    pub bottom_padding: u16,

    /// Empty columns left of the first column (default 2)
    pub left_padding: u16,

    /// Gap between the two text columns (default 4)
    pub column_spacing: u16,

    /// Smallest terminal that can show a page
    pub min_width: u16, // default 40
    pub min_height: u16, // default 5

    /// Distance of the page indicator from the right edge (default 5)
    pub indicator_margin: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_padding: 1,
            bottom_padding: 1,
            left_padding: 2,
            column_spacing: 4,
            min_width: 40,
            min_height: 5,
            indicator_margin: 5,
        }
    }
}

/// Line wrapping configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    /// Indent of the first line of a body paragraph (default 2)
    pub indent: usize,

    /// Paragraphs at least this long are never headings (default 80 chars)
    pub heading_max_len: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            heading_max_len: 80,
        }
    }
}

/// Key bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    /// Characters that save the position and quit.
    ///
    /// `q` and `й` sit on the same physical key in the QWERTY and ЙЦУКЕН
    /// layouts, so both are bound.
    pub quit_keys: Vec<char>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit_keys: vec!['q', 'й'],
        }
    }
}

/// File name of the reading position store inside the home directory
pub const STATE_FILE_NAME: &str = ".fb2_reader_state.json";

/// Environment variable naming the log file; logging is off when unset
pub const LOG_FILE_ENV: &str = "FB2_READER_LOG";

/// Master configuration combining all reader settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReaderConfig {
    pub layout: LayoutConfig,
    pub wrap: WrapConfig,
    pub keys: KeyConfig,
}
