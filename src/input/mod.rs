use crate::reading::Paragraph;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod archive;
pub mod fb2;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Файл не найден: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Не удалось извлечь текст из файла.")]
    ExtractionEmpty(PathBuf),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("Ошибка ZIP-архива: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// A book ready for layout
#[derive(Debug, Clone)]
pub struct LoadedBook {
    /// Key of the reading position store: the file's base name.
    pub id: String,
    pub paragraphs: Vec<Paragraph>,
    pub source: PathBuf,
}

/// Load a FictionBook file, plain or zipped.
///
/// Fails when the file does not exist or no paragraph could be extracted.
pub fn load_book(path: &Path, heading_max_len: usize) -> Result<LoadedBook, LoadError> {
    ensure_exists(path)?;

    let paragraphs = extract_paragraphs(path, heading_max_len);
    if paragraphs.is_empty() {
        return Err(LoadError::ExtractionEmpty(path.to_path_buf()));
    }

    log::info!(
        "Loaded {} paragraph(s) from {}",
        paragraphs.len(),
        path.display()
    );
    Ok(LoadedBook {
        id: book_id(path),
        paragraphs,
        source: path.to_path_buf(),
    })
}

pub fn ensure_exists(path: &Path) -> Result<(), LoadError> {
    if path.exists() {
        Ok(())
    } else {
        Err(LoadError::FileNotFound(path.to_path_buf()))
    }
}

/// Base file name of `path`, used to key the reading position.
pub fn book_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Extract body paragraphs. Every failure yields an empty list.
pub fn extract_paragraphs(path: &Path, heading_max_len: usize) -> Vec<Paragraph> {
    match read_source(path) {
        Ok(Some(xml)) => fb2::parse_paragraphs(&xml, heading_max_len),
        Ok(None) => {
            log::warn!("No .fb2 entry in archive {}", path.display());
            Vec::new()
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn read_source(path: &Path) -> Result<Option<Vec<u8>>, LoadError> {
    if archive::is_archive(path) {
        archive::read_first_book(path)
    } else {
        Ok(Some(fs::read(path)?))
    }
}
