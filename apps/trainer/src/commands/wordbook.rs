//! Wrong-book and favorites commands.

use trainer_core::WordProgress;

use super::{require_word, Result};
use crate::db::{ProgressRepository, SqliteRepository, WrongBookRepository};

/// Entries currently in the wrong book with their progress.
pub fn wrong_book(repo: &SqliteRepository) -> Result<Vec<(String, WordProgress)>> {
    repo.wrong_book_ids()?
        .into_iter()
        .map(|word| {
            let progress = repo.get_progress(&word)?.unwrap_or_default();
            Ok((word, progress))
        })
        .collect()
}

/// Words flagged as favorites.
pub fn favorites(repo: &SqliteRepository) -> Result<Vec<(String, WordProgress)>> {
    Ok(repo
        .all_progress()?
        .into_iter()
        .filter(|(_, progress)| progress.is_favorite)
        .collect())
}

/// Flip a word's favorite flag; returns the new state.
pub fn toggle_favorite(repo: &SqliteRepository, word: &str) -> Result<bool> {
    require_word(repo, word)?;
    let mut progress = repo.get_progress(word)?.unwrap_or_default();
    progress.is_favorite = !progress.is_favorite;
    repo.save_progress(word, &progress)?;
    Ok(progress.is_favorite)
}
