//! Shared fixtures for integration tests.
//!
//! Tests run against an in-memory SQLite repository and drive every command
//! with explicit timestamps, so scenarios are deterministic regardless of
//! when or where they run.

use chrono::{DateTime, Local, TimeZone};
use trainer_core::Word;
use vocab_trainer::db::{
    ProgressRepository, SqliteRepository, VocabularyRepository, WrongBookRepository,
};
use vocab_trainer::notify::NullNotifier;

pub struct TestContext {
    pub repo: SqliteRepository,
    pub notifier: NullNotifier,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            repo: SqliteRepository::open_in_memory().expect("in-memory database"),
            notifier: NullNotifier,
        }
    }

    /// Context with the given words seeded into the catalog.
    pub fn with_words(words: &[&str]) -> Self {
        let ctx = Self::new();
        let entries: Vec<Word> = words.iter().map(|w| sample_word(w)).collect();
        ctx.repo.upsert_words(&entries).expect("seed vocabulary");
        ctx
    }

    /// Assert the wrong-book flag matches set membership for every word.
    pub fn assert_wrong_book_consistent(&self) {
        for (word, progress) in self.repo.all_progress().expect("progress") {
            let in_set = self.repo.wrong_book_contains(&word).expect("wrong book");
            assert_eq!(
                progress.is_in_wrong_book, in_set,
                "wrong-book mismatch for {word}"
            );
        }
    }
}

pub fn sample_word(word: &str) -> Word {
    Word {
        word: word.to_string(),
        phonetic: String::new(),
        translation: format!("translation of {word}"),
    }
}

/// Local timestamp for a deterministic scenario step.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .earliest()
        .expect("valid local time")
}
