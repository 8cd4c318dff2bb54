//! Zipped FictionBook files (`book.fb2.zip`)

use super::LoadError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

pub const ARCHIVE_EXTENSION: &str = "zip";
pub const BOOK_EXTENSION: &str = ".fb2";

/// Whether `path` should be opened as a ZIP archive.
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION))
}

/// Bytes of the first `.fb2` entry in archive order, `None` if there is none.
pub fn read_first_book(path: &Path) -> Result<Option<Vec<u8>>, LoadError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.is_file() || !is_book_entry(entry.name()) {
            continue;
        }

        log::debug!("Reading {} from {}", entry.name(), path.display());
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        return Ok(Some(bytes));
    }

    Ok(None)
}

fn is_book_entry(name: &str) -> bool {
    name.len() >= BOOK_EXTENSION.len()
        && name
            .get(name.len() - BOOK_EXTENSION.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(BOOK_EXTENSION))
}
