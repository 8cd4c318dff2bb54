use crate::input::LoadError;
use crate::storage::StoreError;
use std::io;
use thiserror::Error;

/// Top-level failures of a reader run
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Использование: fb2-reader путь_к_книге.fb2[.zip]")]
    MissingArgument,

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Ошибка терминала: {0}")]
    Terminal(#[from] io::Error),

    #[error("Не удалось сохранить позицию чтения: {0}")]
    State(#[from] StoreError),
}

impl ReaderError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReaderError::MissingArgument => 2,
            ReaderError::Load(LoadError::FileNotFound(_)) => 3,
            ReaderError::Load(_) => 4,
            ReaderError::Terminal(_) => 1,
            ReaderError::State(_) => 5,
        }
    }
}
