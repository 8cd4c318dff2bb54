use super::{ReaderState, StateStore, StoreError};
use crate::config::STATE_FILE_NAME;
use std::fs;
use std::io::{self, Write};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reading positions stored as a pretty-printed JSON object
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.fb2_reader_state.json`, or in the current directory when
    /// the home directory is unknown.
    pub fn default_location() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(STATE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries whose value is not a page index are skipped one by one.
    fn read(&self) -> Result<ReaderState, StoreError> {
        let content = fs::read_to_string(&self.path)?;
        let Value::Object(entries) = serde_json::from_str(&content)? else {
            log::warn!("State file {} is not a JSON object", self.path.display());
            return Ok(ReaderState::new());
        };

        Ok(entries
            .into_iter()
            .filter_map(|(book, page)| {
                match page.as_u64().and_then(|p| usize::try_from(p).ok()) {
                    Some(index) => Some((book, index)),
                    None => {
                        log::warn!("Skipping saved position for {}: {}", book, page);
                        None
                    }
                }
            })
            .collect())
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> ReaderState {
        match self.read() {
            Ok(state) => state,
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No state file at {}", self.path.display());
                ReaderState::new()
            }
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable state file {}: {}",
                    self.path.display(),
                    e
                );
                ReaderState::new()
            }
        }
    }

    fn save(&self, state: &ReaderState) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // Write beside the target and rename, so a crash never leaves a
        // truncated file behind.
        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, state)?;
        file.flush()?;
        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        log::info!(
            "Saved {} reading position(s) to {}",
            state.len(),
            self.path.display()
        );
        Ok(())
    }
}
