//! Read-only statistics projections.
//!
//! Pure functions over progress records and counters; nothing here mutates
//! state.

use crate::types::{
    DailyStats, ProgressOverview, StudySettings, VocabCounts, WordProgress, MAX_LEVEL,
};
use chrono::NaiveDate;

/// Partition level values into new / learning / mastered buckets.
pub fn partition<I>(levels: I) -> VocabCounts
where
    I: IntoIterator<Item = u8>,
{
    let mut counts = VocabCounts::default();
    for level in levels {
        counts.total += 1;
        if level == 0 {
            counts.new += 1;
        } else if level >= MAX_LEVEL {
            counts.mastered += 1;
        } else {
            counts.learning += 1;
        }
    }
    counts
}

/// Whether an item is due for review on `today`.
///
/// Only the learning band (levels 1-4) is ever due; an item there with no
/// scheduled date has never been reviewed and is always due.
pub fn is_due(progress: &WordProgress, today: NaiveDate) -> bool {
    if progress.level == 0 || progress.level >= MAX_LEVEL {
        return false;
    }
    match progress.next_review {
        None => true,
        Some(date) => date <= today,
    }
}

/// Whole-percent answer accuracy; 0 when nothing has been answered.
pub fn accuracy(correct: u32, wrong: u32) -> u32 {
    let total = correct + wrong;
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// Combined overview consumed by display layers.
pub fn overview(
    counts: VocabCounts,
    review_due: usize,
    daily: &DailyStats,
    settings: &StudySettings,
) -> ProgressOverview {
    ProgressOverview {
        total_words: counts.total,
        new_words: counts.new,
        learning_words: counts.learning,
        mastered_words: counts.mastered,
        review_due,
        today_learned: daily.today_learned,
        today_reviewed: daily.today_reviewed,
        daily_new_goal: settings.daily_new_goal,
        daily_review_goal: settings.daily_review_goal,
        streak: daily.streak,
        accuracy: accuracy(daily.total_correct, daily.total_wrong),
    }
}
