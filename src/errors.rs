use thiserror::Error;

use crate::types::InvalidDrawNumbers;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("draw {id} is corrupt: {reason}")]
    Corrupt { id: i64, reason: String },
    #[error("draw store lock poisoned")]
    Poisoned,
    #[error("storage task failed: {0}")]
    Task(String),
}

impl StorageError {
    pub fn corrupt_numbers(id: i64, err: InvalidDrawNumbers) -> Self {
        Self::Corrupt {
            id,
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Error)]
#[error("randomness source unavailable: {0}")]
pub struct GenerationError(pub String);

impl From<rand::Error> for GenerationError {
    fn from(err: rand::Error) -> Self {
        Self(err.to_string())
    }
}

/// Failure of a core draw operation.
#[derive(Debug, Error)]
pub enum LottoError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl LottoError {
    pub fn code(&self) -> &'static str {
        match self {
            LottoError::Storage(_) => "storage_error",
            LottoError::Generation(_) => "generation_error",
        }
    }
}
