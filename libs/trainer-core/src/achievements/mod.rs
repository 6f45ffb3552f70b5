//! Rule-based achievement engine.
//!
//! One evaluation pass builds an immutable [`Snapshot`], walks the catalog
//! in order and returns every still-locked definition whose condition holds.
//! Recording the unlock is the ledger's job (`try_unlock` in the store);
//! only first-time insertions count as newly unlocked, which makes repeated
//! passes over an unchanged snapshot idempotent.

pub mod catalog;

pub use catalog::{AchievementDef, Condition, CATALOG, NEXT_UP_ORDER};

use crate::stats;
use crate::types::DailyStats;
use serde::Serialize;

/// Immutable aggregate values one evaluation pass runs against.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub total_learned: u32,
    pub streak: u32,
    /// Whole-percent accuracy over all answers ever given.
    pub accuracy: u32,
    pub total_answers: u32,
    pub mastered: u32,
    pub today_learned: u32,
    pub daily_goal: u32,
    /// Wall-clock hour of the triggering event, caller-supplied.
    pub hour: u32,
}

impl Snapshot {
    pub fn build(daily: &DailyStats, mastered: usize, daily_goal: u32, hour: u32) -> Self {
        Self {
            total_learned: daily.total_learned,
            streak: daily.streak,
            accuracy: stats::accuracy(daily.total_correct, daily.total_wrong),
            total_answers: daily.total_correct + daily.total_wrong,
            mastered: mastered as u32,
            today_learned: daily.today_learned,
            // A zero goal would make DailyGoalReached trivially true.
            daily_goal: daily_goal.max(1),
            hour,
        }
    }
}

impl Condition {
    /// Whether the condition holds for the snapshot.
    pub fn is_met(&self, snapshot: &Snapshot) -> bool {
        match *self {
            Self::TotalLearnedAtLeast(n) => snapshot.total_learned >= n,
            Self::StreakAtLeast(n) => snapshot.streak >= n,
            Self::AccuracyAtLeast {
                percent,
                min_answers,
            } => snapshot.accuracy >= percent && snapshot.total_answers >= min_answers,
            Self::MasteredAtLeast(n) => snapshot.mastered >= n,
            Self::DailyGoalReached => snapshot.today_learned >= snapshot.daily_goal,
            Self::HourBetween { start, end } => snapshot.hour >= start && snapshot.hour < end,
        }
    }

    /// Numeric `(current, target)` pair backing the condition, if it has one.
    fn threshold(&self, snapshot: &Snapshot) -> Option<(u32, u32)> {
        match *self {
            Self::TotalLearnedAtLeast(n) => Some((snapshot.total_learned, n)),
            Self::StreakAtLeast(n) => Some((snapshot.streak, n)),
            Self::MasteredAtLeast(n) => Some((snapshot.mastered, n)),
            Self::AccuracyAtLeast { .. } | Self::DailyGoalReached | Self::HourBetween { .. } => {
                None
            }
        }
    }
}

/// Progress toward a numeric-threshold achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementProgress {
    pub current: u32,
    pub target: u32,
    pub percent: u32,
}

/// Definitions not yet unlocked whose conditions hold, in catalog order.
pub fn evaluate(snapshot: &Snapshot, unlocked: &[String]) -> Vec<&'static AchievementDef> {
    CATALOG
        .iter()
        .filter(|def| !unlocked.iter().any(|id| id == def.id) && def.condition.is_met(snapshot))
        .collect()
}

/// First locked definition from the fixed priority order.
pub fn next_locked(unlocked: &[String]) -> Option<&'static AchievementDef> {
    NEXT_UP_ORDER
        .iter()
        .filter_map(|id| catalog::get(id))
        .find(|def| !unlocked.iter().any(|u| u == def.id))
}

/// Progress toward a definition with a numeric threshold.
pub fn progress_toward(
    def: &AchievementDef,
    snapshot: &Snapshot,
) -> Option<AchievementProgress> {
    let (current, target) = def.condition.threshold(snapshot)?;
    let percent = ((current as f64 / target as f64) * 100.0).round().min(100.0) as u32;
    Some(AchievementProgress {
        current,
        target,
        percent,
    })
}
