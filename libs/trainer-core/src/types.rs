//! Core types for the vocabulary trainer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Highest mastery level; items at this level count as mastered.
pub const MAX_LEVEL: u8 = 5;

/// Mastery bucket derived from a progress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    New,
    Learning,
    Mastered,
}

impl LevelStatus {
    /// Bucket for a raw level value.
    pub fn of(level: u8) -> Self {
        if level == 0 {
            Self::New
        } else if level >= MAX_LEVEL {
            Self::Mastered
        } else {
            Self::Learning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Learning => "learning",
            Self::Mastered => "mastered",
        }
    }
}

/// Learning progress for one vocabulary item.
///
/// Created lazily with defaults on first access; mutated only through
/// scheduler transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordProgress {
    /// Mastery level 0-5. 0 = unseen, 1-4 = learning, 5 = mastered.
    pub level: u8,
    /// Next scheduled review date. `None` means never reviewed: always due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<NaiveDate>,
    pub correct_count: u32,
    pub wrong_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<DateTime<Utc>>,
    pub is_favorite: bool,
    /// Mirrors wrong-book membership; kept in sync by the command layer.
    pub is_in_wrong_book: bool,
}

impl Default for WordProgress {
    fn default() -> Self {
        Self {
            level: 0,
            next_review: None,
            correct_count: 0,
            wrong_count: 0,
            last_studied: None,
            is_favorite: false,
            is_in_wrong_book: false,
        }
    }
}

impl WordProgress {
    pub fn status(&self) -> LevelStatus {
        LevelStatus::of(self.level)
    }
}

/// Lifetime and per-day study counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub total_learned: u32,
    pub total_correct: u32,
    pub total_wrong: u32,
    /// Reset to 0 at each day rollover.
    pub today_learned: u32,
    pub today_reviewed: u32,
    /// Consecutive study days; 0 after a break or on first use.
    pub streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_study_date: Option<NaiveDate>,
}

/// A vocabulary catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub translation: String,
}

/// User study configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySettings {
    pub daily_new_goal: u32,
    pub daily_review_goal: u32,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            daily_new_goal: 20,
            daily_review_goal: 50,
        }
    }
}

/// Partition of the vocabulary by mastery bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VocabCounts {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub mastered: usize,
}

/// Combined progress overview consumed by display layers.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressOverview {
    pub total_words: usize,
    pub new_words: usize,
    pub learning_words: usize,
    pub mastered_words: usize,
    pub review_due: usize,
    pub today_learned: u32,
    pub today_reviewed: u32,
    pub daily_new_goal: u32,
    pub daily_review_goal: u32,
    pub streak: u32,
    pub accuracy: u32,
}
