//! Achievement evaluation and queries.

use chrono::{DateTime, Local, Timelike, Utc};
use trainer_core::achievements::{self, AchievementDef, AchievementProgress, Snapshot};
use trainer_core::{DailyStats, CATALOG, MAX_LEVEL};

use super::Result;
use crate::db::{
    AchievementRepository, ProgressRepository, SettingsRepository, SqliteRepository,
    StatsRepository,
};
use crate::notify::Notifier;

/// Evaluate the catalog against fresh aggregates and record unlocks.
///
/// Returns newly unlocked definitions in catalog order. The ledger insert is
/// the only unlock authority, so re-running with an unchanged snapshot
/// reports nothing.
pub(crate) fn run_achievement_pass(
    repo: &SqliteRepository,
    notifier: &dyn Notifier,
    stats: &DailyStats,
    now: DateTime<Local>,
) -> Result<Vec<&'static AchievementDef>> {
    let snapshot = build_snapshot(repo, stats, now)?;
    let unlocked = repo.unlocked_ids()?;

    let mut newly = Vec::new();
    for def in achievements::evaluate(&snapshot, &unlocked) {
        if repo.try_unlock(def.id, now.with_timezone(&Utc))? {
            notifier.achievement_unlocked(def);
            newly.push(def);
        }
    }
    Ok(newly)
}

fn build_snapshot(
    repo: &SqliteRepository,
    stats: &DailyStats,
    now: DateTime<Local>,
) -> Result<Snapshot> {
    let mastered = repo
        .all_progress()?
        .iter()
        .filter(|(_, progress)| progress.level >= MAX_LEVEL)
        .count();
    let settings = repo.get_settings()?;
    Ok(Snapshot::build(
        stats,
        mastered,
        settings.daily_new_goal,
        now.hour(),
    ))
}

/// One catalog entry with its unlock state and numeric progress.
#[derive(Debug)]
pub struct AchievementView {
    pub def: &'static AchievementDef,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub progress: Option<AchievementProgress>,
}

/// Full catalog with unlock state, in display order.
pub fn list_achievements(
    repo: &SqliteRepository,
    now: DateTime<Local>,
) -> Result<Vec<AchievementView>> {
    let stats = repo.get_daily_stats()?;
    let snapshot = build_snapshot(repo, &stats, now)?;
    let unlocked = repo.unlocked_achievements()?;

    Ok(CATALOG
        .iter()
        .map(|def| {
            let unlocked_at = unlocked
                .iter()
                .find(|(id, _)| id.as_str() == def.id)
                .map(|(_, ts)| *ts);
            AchievementView {
                def,
                unlocked_at,
                progress: achievements::progress_toward(def, &snapshot),
            }
        })
        .collect())
}

/// The next achievement worth chasing, with progress when it is numeric.
pub fn next_achievement(
    repo: &SqliteRepository,
    now: DateTime<Local>,
) -> Result<Option<AchievementView>> {
    let unlocked = repo.unlocked_ids()?;
    let Some(def) = achievements::next_locked(&unlocked) else {
        return Ok(None);
    };

    let stats = repo.get_daily_stats()?;
    let snapshot = build_snapshot(repo, &stats, now)?;
    Ok(Some(AchievementView {
        def,
        unlocked_at: None,
        progress: achievements::progress_toward(def, &snapshot),
    }))
}
