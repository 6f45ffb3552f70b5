//! Repository pattern for database access.

use crate::db::error::DbError;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use trainer_core::types::{DailyStats, StudySettings, Word, WordProgress, MAX_LEVEL};

type Result<T> = std::result::Result<T, DbError>;

const DATE_FMT: &str = "%Y-%m-%d";

/// Repository for per-item learning progress.
pub trait ProgressRepository {
    fn get_progress(&self, word: &str) -> Result<Option<WordProgress>>;
    fn save_progress(&self, word: &str, progress: &WordProgress) -> Result<()>;
    fn all_progress(&self) -> Result<Vec<(String, WordProgress)>>;
    fn delete_all_progress(&self) -> Result<()>;
}

/// Repository for the daily stats record and the study calendar.
pub trait StatsRepository {
    fn get_daily_stats(&self) -> Result<DailyStats>;
    fn save_daily_stats(&self, stats: &DailyStats) -> Result<()>;
    fn record_study_day(&self, day: NaiveDate, learned: u32) -> Result<()>;
    fn calendar(&self, days: usize, today: NaiveDate) -> Result<Vec<CalendarDay>>;
    fn calendar_all(&self) -> Result<Vec<CalendarDay>>;
}

/// Repository for the wrong-book membership set.
pub trait WrongBookRepository {
    fn wrong_book_contains(&self, word: &str) -> Result<bool>;
    fn wrong_book_add(&self, word: &str) -> Result<()>;
    fn wrong_book_remove(&self, word: &str) -> Result<()>;
    fn wrong_book_ids(&self) -> Result<Vec<String>>;
    fn wrong_book_clear(&self) -> Result<()>;
}

/// Repository for the achievement unlock ledger.
pub trait AchievementRepository {
    fn unlocked_achievements(&self) -> Result<Vec<(String, DateTime<Utc>)>>;
    fn unlocked_ids(&self) -> Result<Vec<String>>;
    /// Returns true iff the id was newly inserted. Existing rows are never
    /// overwritten; insertion is the sole unlock authority.
    fn try_unlock(&self, id: &str, now: DateTime<Utc>) -> Result<bool>;
}

/// Repository for the vocabulary catalog.
pub trait VocabularyRepository {
    fn all_word_ids(&self) -> Result<Vec<String>>;
    fn all_words(&self) -> Result<Vec<Word>>;
    fn get_word(&self, word: &str) -> Result<Option<Word>>;
    fn upsert_words(&self, words: &[Word]) -> Result<usize>;
    fn word_count(&self) -> Result<usize>;
}

/// Repository for study settings.
pub trait SettingsRepository {
    fn get_settings(&self) -> Result<StudySettings>;
    fn save_settings(&self, settings: &StudySettings) -> Result<()>;
}

/// One study-calendar data point.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CalendarDay {
    pub day: String,
    pub learned: u32,
}

/// SQLite implementation of the repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_DAILY_STATS)?;
        self.conn.execute_batch(super::schema::INIT_SETTINGS)?;
        Ok(())
    }

    /// Restore a ledger entry with its original timestamp (data import).
    pub fn restore_achievement(&self, id: &str, unlocked_at: DateTime<Utc>) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
            params![id, unlocked_at.to_rfc3339()],
        )?;
        Ok(())
    }

    /// Restore a calendar row verbatim (data import).
    pub fn restore_calendar_day(&self, day: &CalendarDay) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO study_calendar (day, learned) VALUES (?1, ?2)",
            params![day.day, day.learned],
        )?;
        Ok(())
    }

    fn row_to_progress(row: &rusqlite::Row) -> rusqlite::Result<WordProgress> {
        // Malformed stored values degrade to defaults rather than erroring:
        // an unparseable date means "due now" / "never studied".
        let level: i64 = row.get(0)?;
        let next_review: Option<String> = row.get(1)?;
        let last_studied: Option<String> = row.get(4)?;

        Ok(WordProgress {
            level: level.clamp(0, MAX_LEVEL as i64) as u8,
            next_review: next_review
                .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FMT).ok()),
            correct_count: row.get(2)?,
            wrong_count: row.get(3)?,
            last_studied: last_studied.and_then(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
            }),
            is_favorite: row.get::<_, i64>(5)? != 0,
            is_in_wrong_book: row.get::<_, i64>(6)? != 0,
        })
    }
}

impl ProgressRepository for SqliteRepository {
    fn get_progress(&self, word: &str) -> Result<Option<WordProgress>> {
        self.conn
            .query_row(
                "SELECT level, next_review, correct_count, wrong_count, last_studied, is_favorite, is_in_wrong_book
                 FROM word_progress WHERE word = ?1",
                params![word],
                Self::row_to_progress,
            )
            .optional()
            .map_err(Into::into)
    }

    fn save_progress(&self, word: &str, progress: &WordProgress) -> Result<()> {
        let next_review = progress.next_review.map(|d| d.format(DATE_FMT).to_string());
        let last_studied = progress.last_studied.map(|t| t.to_rfc3339());

        self.conn.execute(
            "INSERT OR REPLACE INTO word_progress
                (word, level, next_review, correct_count, wrong_count, last_studied, is_favorite, is_in_wrong_book)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                word,
                progress.level,
                next_review,
                progress.correct_count,
                progress.wrong_count,
                last_studied,
                progress.is_favorite as i64,
                progress.is_in_wrong_book as i64,
            ],
        )?;
        Ok(())
    }

    fn all_progress(&self) -> Result<Vec<(String, WordProgress)>> {
        let mut stmt = self.conn.prepare(
            "SELECT word, level, next_review, correct_count, wrong_count, last_studied, is_favorite, is_in_wrong_book
             FROM word_progress ORDER BY word",
        )?;

        let rows = stmt
            .query_map([], |row| {
                let word: String = row.get(0)?;
                let level: i64 = row.get(1)?;
                let next_review: Option<String> = row.get(2)?;
                let last_studied: Option<String> = row.get(5)?;
                let progress = WordProgress {
                    level: level.clamp(0, MAX_LEVEL as i64) as u8,
                    next_review: next_review
                        .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FMT).ok()),
                    correct_count: row.get(3)?,
                    wrong_count: row.get(4)?,
                    last_studied: last_studied.and_then(|s| {
                        DateTime::parse_from_rfc3339(&s)
                            .ok()
                            .map(|dt| dt.with_timezone(&Utc))
                    }),
                    is_favorite: row.get::<_, i64>(6)? != 0,
                    is_in_wrong_book: row.get::<_, i64>(7)? != 0,
                };
                Ok((word, progress))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn delete_all_progress(&self) -> Result<()> {
        self.conn.execute("DELETE FROM word_progress", [])?;
        Ok(())
    }
}

impl StatsRepository for SqliteRepository {
    fn get_daily_stats(&self) -> Result<DailyStats> {
        self.conn
            .query_row(
                "SELECT total_learned, total_correct, total_wrong, today_learned, today_reviewed, streak, last_study_date
                 FROM daily_stats WHERE id = 1",
                [],
                |row| {
                    let last_study_date: Option<String> = row.get(6)?;
                    Ok(DailyStats {
                        total_learned: row.get(0)?,
                        total_correct: row.get(1)?,
                        total_wrong: row.get(2)?,
                        today_learned: row.get(3)?,
                        today_reviewed: row.get(4)?,
                        streak: row.get(5)?,
                        last_study_date: last_study_date
                            .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FMT).ok()),
                    })
                },
            )
            .map_err(Into::into)
    }

    fn save_daily_stats(&self, stats: &DailyStats) -> Result<()> {
        let last_study_date = stats
            .last_study_date
            .map(|d| d.format(DATE_FMT).to_string());

        self.conn.execute(
            "UPDATE daily_stats SET total_learned = ?1, total_correct = ?2, total_wrong = ?3,
                today_learned = ?4, today_reviewed = ?5, streak = ?6, last_study_date = ?7
             WHERE id = 1",
            params![
                stats.total_learned,
                stats.total_correct,
                stats.total_wrong,
                stats.today_learned,
                stats.today_reviewed,
                stats.streak,
                last_study_date,
            ],
        )?;
        Ok(())
    }

    fn record_study_day(&self, day: NaiveDate, learned: u32) -> Result<()> {
        let day = day.format(DATE_FMT).to_string();
        self.conn.execute(
            "INSERT OR IGNORE INTO study_calendar (day, learned) VALUES (?1, 0)",
            params![day],
        )?;
        self.conn.execute(
            "UPDATE study_calendar SET learned = learned + ?2 WHERE day = ?1",
            params![day, learned],
        )?;
        Ok(())
    }

    fn calendar(&self, days: usize, today: NaiveDate) -> Result<Vec<CalendarDay>> {
        let mut data = Vec::with_capacity(days);

        for i in 0..days {
            let date = today - chrono::Duration::days(i as i64);
            let day = date.format(DATE_FMT).to_string();

            let learned: u32 = self
                .conn
                .query_row(
                    "SELECT learned FROM study_calendar WHERE day = ?1",
                    params![day],
                    |row| row.get(0),
                )
                .optional()?
                .unwrap_or(0);

            data.push(CalendarDay { day, learned });
        }

        // Oldest first
        data.reverse();
        Ok(data)
    }

    fn calendar_all(&self) -> Result<Vec<CalendarDay>> {
        let mut stmt = self
            .conn
            .prepare("SELECT day, learned FROM study_calendar ORDER BY day")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CalendarDay {
                    day: row.get(0)?,
                    learned: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

impl WrongBookRepository for SqliteRepository {
    fn wrong_book_contains(&self, word: &str) -> Result<bool> {
        let found: Option<String> = self
            .conn
            .query_row(
                "SELECT word FROM wrong_book WHERE word = ?1",
                params![word],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn wrong_book_add(&self, word: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO wrong_book (word) VALUES (?1)",
            params![word],
        )?;
        Ok(())
    }

    fn wrong_book_remove(&self, word: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM wrong_book WHERE word = ?1", params![word])?;
        Ok(())
    }

    fn wrong_book_ids(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word FROM wrong_book ORDER BY word")?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    fn wrong_book_clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM wrong_book", [])?;
        Ok(())
    }
}

impl AchievementRepository for SqliteRepository {
    fn unlocked_achievements(&self) -> Result<Vec<(String, DateTime<Utc>)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, unlocked_at FROM achievements ORDER BY unlocked_at")?;

        let rows = stmt
            .query_map([], |row| {
                let id: String = row.get(0)?;
                let ts: String = row.get(1)?;
                Ok((id, ts))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows
            .into_iter()
            .filter_map(|(id, ts)| {
                DateTime::parse_from_rfc3339(&ts)
                    .ok()
                    .map(|dt| (id, dt.with_timezone(&Utc)))
            })
            .collect())
    }

    fn unlocked_ids(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT id FROM achievements")?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    fn try_unlock(&self, id: &str, now: DateTime<Utc>) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
            params![id, now.to_rfc3339()],
        )?;
        Ok(inserted > 0)
    }
}

impl VocabularyRepository for SqliteRepository {
    fn all_word_ids(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT word FROM words ORDER BY word")?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    fn all_words(&self) -> Result<Vec<Word>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word, phonetic, translation FROM words ORDER BY word")?;

        let words = stmt
            .query_map([], |row| {
                Ok(Word {
                    word: row.get(0)?,
                    phonetic: row.get(1)?,
                    translation: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(words)
    }

    fn get_word(&self, word: &str) -> Result<Option<Word>> {
        self.conn
            .query_row(
                "SELECT word, phonetic, translation FROM words WHERE word = ?1",
                params![word],
                |row| {
                    Ok(Word {
                        word: row.get(0)?,
                        phonetic: row.get(1)?,
                        translation: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    fn upsert_words(&self, words: &[Word]) -> Result<usize> {
        let mut count = 0;
        for entry in words {
            self.conn.execute(
                "INSERT OR REPLACE INTO words (word, phonetic, translation) VALUES (?1, ?2, ?3)",
                params![entry.word, entry.phonetic, entry.translation],
            )?;
            count += 1;
        }
        Ok(count)
    }

    fn word_count(&self) -> Result<usize> {
        self.conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))
            .map_err(Into::into)
    }
}

impl SettingsRepository for SqliteRepository {
    fn get_settings(&self) -> Result<StudySettings> {
        self.conn
            .query_row(
                "SELECT daily_new_goal, daily_review_goal FROM settings WHERE id = 1",
                [],
                |row| {
                    Ok(StudySettings {
                        daily_new_goal: row.get(0)?,
                        daily_review_goal: row.get(1)?,
                    })
                },
            )
            .map_err(Into::into)
    }

    fn save_settings(&self, settings: &StudySettings) -> Result<()> {
        self.conn.execute(
            "UPDATE settings SET daily_new_goal = ?1, daily_review_goal = ?2 WHERE id = 1",
            params![settings.daily_new_goal, settings.daily_review_goal],
        )?;
        Ok(())
    }
}
