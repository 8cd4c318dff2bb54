/// A paragraph of book text, trimmed and with whitespace runs collapsed
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Paragraph {
    text: String,
    /// Heading heuristic result, computed once at construction.
    heading: bool,
}

impl Paragraph {
    /// Build a paragraph with the default heading length limit.
    ///
    /// Returns `None` when the text is empty after trimming.
    pub fn new(text: &str) -> Option<Self> {
        Self::with_heading_limit(text, crate::config::WrapConfig::default().heading_max_len)
    }

    pub fn with_heading_limit(text: &str, heading_max_len: usize) -> Option<Self> {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            return None;
        }
        let heading = looks_like_heading(&text, heading_max_len);
        Some(Self { text, heading })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_heading(&self) -> bool {
        self.heading
    }
}

/// All cased letters uppercase (at least one of them) and shorter than
/// `max_len` characters. Digits and punctuation are ignored.
pub fn looks_like_heading(text: &str, max_len: usize) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased && text.chars().count() < max_len
}
