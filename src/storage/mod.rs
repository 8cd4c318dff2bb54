//! Persistence of the last-read page per book
//!
//! The whole [`ReaderState`] is read once at startup and written once on
//! quit. There is no locking between processes: two readers open at the
//! same time race on save and the later write wins.

use std::collections::BTreeMap;
use std::io;
use thiserror::Error;

pub mod json_store;
pub mod memory;

pub use json_store::JsonStateStore;
pub use memory::MemoryStateStore;

/// Book identifier (file base name) to zero-based page index
pub type ReaderState = BTreeMap<String, usize>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("ошибка записи JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("не удалось заменить файл состояния: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Key-value store for reading positions
pub trait StateStore {
    /// Read the stored mapping. A missing or unparsable file gives an empty
    /// map; entries that are not page indices are dropped individually.
    fn load(&self) -> ReaderState;

    /// Replace the stored mapping with `state`.
    fn save(&self, state: &ReaderState) -> Result<(), StoreError>;
}
