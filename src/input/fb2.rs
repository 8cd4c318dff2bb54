//! FictionBook 2 paragraph extraction
//!
//! Collects the text of every `<p>` inside a `<section>` inside a `<body>`,
//! with inline markup (`<emphasis>`, `<strong>`, links, ...) flattened to
//! plain text. Elements are matched by local name, so namespace prefixes do
//! not matter. Parsing is forgiving: mismatched end tags are accepted and a
//! fatal XML error ends extraction, keeping what was collected so far.

use crate::reading::Paragraph;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::borrow::Cow;

/// Element nesting relevant to extraction
#[derive(Debug, Default)]
struct Scope {
    body: usize,
    section: usize,
    paragraph: usize,
    text: String,
}

impl Scope {
    fn open(&mut self, name: &[u8]) {
        match name {
            b"body" => self.body += 1,
            b"section" if self.body > 0 => self.section += 1,
            b"p" if self.section > 0 => self.paragraph += 1,
            _ => {}
        }
    }

    /// Returns the collected text when the outermost paragraph closes.
    fn close(&mut self, name: &[u8]) -> Option<String> {
        match name {
            b"body" => {
                self.body = self.body.saturating_sub(1);
                if self.body == 0 {
                    self.section = 0;
                }
                None
            }
            b"section" => {
                self.section = self.section.saturating_sub(1);
                None
            }
            b"p" if self.paragraph > 0 => {
                self.paragraph -= 1;
                if self.paragraph == 0 {
                    Some(std::mem::take(&mut self.text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn in_paragraph(&self) -> bool {
        self.paragraph > 0
    }

    fn push(&mut self, text: &str) {
        if self.in_paragraph() {
            self.text.push_str(text);
        }
    }
}

/// Extract body paragraphs from FB2 markup.
pub fn parse_paragraphs(xml: &[u8], heading_max_len: usize) -> Vec<Paragraph> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);
    reader.config_mut().check_end_names = false;

    let mut buf = Vec::new();
    let mut scope = Scope::default();
    let mut paragraphs = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => scope.open(e.local_name().as_ref()),
            Ok(Event::End(e)) => {
                if let Some(text) = scope.close(e.local_name().as_ref()) {
                    paragraphs.extend(Paragraph::with_heading_limit(&text, heading_max_len));
                }
            }
            Ok(Event::Text(e)) if scope.in_paragraph() => {
                let text = e
                    .decode()
                    .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned().into());
                scope.push(&text);
            }
            Ok(Event::CData(e)) if scope.in_paragraph() => {
                let text = reader
                    .decoder()
                    .decode(&e)
                    .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned().into());
                scope.push(&text);
            }
            Ok(Event::GeneralRef(e)) if scope.in_paragraph() => {
                if let Some(resolved) = e.decode().ok().and_then(|name| resolve_entity(&name)) {
                    scope.push(&resolved);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!(
                    "FB2 markup error at byte {}: {}; keeping {} paragraph(s)",
                    reader.buffer_position(),
                    e,
                    paragraphs.len()
                );
                break;
            }
        }
        buf.clear();
    }

    // A paragraph cut off by the end of input still counts.
    if scope.in_paragraph() {
        paragraphs.extend(Paragraph::with_heading_limit(&scope.text, heading_max_len));
    }

    paragraphs
}

/// Resolve `&name;`; unknown entities are dropped.
fn resolve_entity(name: &str) -> Option<Cow<'static, str>> {
    match unescape(&format!("&{};", name)) {
        Ok(resolved) => Some(Cow::Owned(resolved.into_owned())),
        Err(_) if name == "nbsp" => Some(Cow::Borrowed("\u{a0}")),
        Err(e) => {
            log::debug!("Dropping unknown entity &{};: {}", name, e);
            None
        }
    }
}
