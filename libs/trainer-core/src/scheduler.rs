//! Fixed-interval review scheduler.
//!
//! A small Ebbinghaus-style interval table keyed by mastery level, not an
//! adaptive memory model. Transitions are pure: they take the current record
//! and a caller-supplied instant, and return the new record together with
//! the wrong-book change the caller must apply.

use crate::types::{WordProgress, MAX_LEVEL};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Wrong-book membership change required by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongBookAction {
    None,
    Add,
    Remove,
}

/// Result of applying a scheduler transition.
#[derive(Debug, Clone)]
pub struct Transition {
    pub progress: WordProgress,
    pub wrong_book: WrongBookAction,
}

/// Interval-table scheduler with configurable review intervals.
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Days until next review, indexed by `level - 1` for levels 1-5.
    pub intervals: [i64; MAX_LEVEL as usize],
    /// Level at or above which a correct answer clears wrong-book membership.
    pub recovery_level: u8,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            intervals: [1, 2, 4, 7, 15],
            recovery_level: 3,
        }
    }
}

impl Scheduler {
    /// Review interval in days for a level; unknown levels fall back to 1.
    pub fn interval_days(&self, level: u8) -> i64 {
        match level {
            1..=MAX_LEVEL => self.intervals[(level - 1) as usize],
            _ => 1,
        }
    }

    /// Next review date for a level, counted from `today`.
    pub fn next_review(&self, level: u8, today: NaiveDate) -> NaiveDate {
        today + Duration::days(self.interval_days(level))
    }

    /// First exposure to an unseen item.
    ///
    /// Only valid at level 0: a known item starts at level 2, an unknown one
    /// at level 1 and enters the wrong book. Returns `None` when the item is
    /// already leveled; first exposure is not re-triggerable.
    pub fn first_exposure(
        &self,
        current: &WordProgress,
        known: bool,
        now: DateTime<Utc>,
    ) -> Option<Transition> {
        if current.level != 0 {
            return None;
        }

        let mut progress = current.clone();
        progress.level = if known { 2 } else { 1 };
        progress.last_studied = Some(now);
        progress.next_review = Some(self.next_review(progress.level, now.date_naive()));

        let wrong_book = if known {
            progress.correct_count += 1;
            WrongBookAction::None
        } else {
            progress.wrong_count += 1;
            progress.is_in_wrong_book = true;
            WrongBookAction::Add
        };

        Some(Transition {
            progress,
            wrong_book,
        })
    }

    /// Correct answer on review: promote one level, capped at mastered.
    ///
    /// Crossing the recovery level clears wrong-book membership.
    pub fn record_correct(&self, current: &WordProgress, now: DateTime<Utc>) -> Transition {
        let mut progress = current.clone();
        progress.level = (progress.level + 1).min(MAX_LEVEL);
        progress.correct_count += 1;
        progress.last_studied = Some(now);

        let wrong_book = if progress.level >= self.recovery_level && progress.is_in_wrong_book {
            progress.is_in_wrong_book = false;
            WrongBookAction::Remove
        } else {
            WrongBookAction::None
        };

        progress.next_review = Some(self.next_review(progress.level, now.date_naive()));

        Transition {
            progress,
            wrong_book,
        }
    }

    /// Wrong answer on review: demote one level, floored at 1.
    ///
    /// The item enters the wrong book and is rescheduled at the level-1
    /// interval regardless of the demoted level, so it always comes back at
    /// the shortest interval.
    pub fn record_wrong(&self, current: &WordProgress, now: DateTime<Utc>) -> Transition {
        let mut progress = current.clone();
        progress.level = progress.level.saturating_sub(1).max(1);
        progress.wrong_count += 1;
        progress.last_studied = Some(now);

        let wrong_book = if progress.is_in_wrong_book {
            WrongBookAction::None
        } else {
            progress.is_in_wrong_book = true;
            WrongBookAction::Add
        };

        progress.next_review = Some(self.next_review(1, now.date_naive()));

        Transition {
            progress,
            wrong_book,
        }
    }
}
