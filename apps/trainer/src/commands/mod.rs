//! Command layer: orchestrates the core scheduler and rule engine against
//! the repositories. Every clock-dependent command takes the event instant
//! from the caller.

pub mod achievements;
pub mod settings;
pub mod stats;
pub mod study;
pub mod transfer;
pub mod wordbook;

use crate::db::{DbError, SqliteRepository, VocabularyRepository};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid data file: {0}")]
    Format(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Commands only operate on words present in the catalog.
pub(crate) fn require_word(repo: &SqliteRepository, word: &str) -> Result<()> {
    if repo.get_word(word)?.is_none() {
        return Err(CommandError::UnknownWord(word.to_string()));
    }
    Ok(())
}
