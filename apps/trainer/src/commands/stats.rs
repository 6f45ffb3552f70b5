//! Statistics commands: pure read path over the stores.

use chrono::{DateTime, Local};
use trainer_core::{stats as projections, ProgressOverview};

use super::study::ensure_rollover;
use super::Result;
use crate::db::{
    CalendarDay, ProgressRepository, SettingsRepository, SqliteRepository, StatsRepository,
    VocabularyRepository,
};

/// Progress overview across the whole vocabulary.
pub fn overview(repo: &SqliteRepository, now: DateTime<Local>) -> Result<ProgressOverview> {
    let stats = ensure_rollover(repo, now)?;
    let settings = repo.get_settings()?;
    let progress = repo.all_progress()?;
    let today = now.date_naive();

    let mut counts = projections::partition(progress.iter().map(|(_, p)| p.level));
    // Catalog words without a progress row yet are unseen.
    let total = repo.word_count()?;
    counts.new += total.saturating_sub(counts.total);
    counts.total = total.max(counts.total);

    let review_due = progress
        .iter()
        .filter(|(_, p)| projections::is_due(p, today))
        .count();

    Ok(projections::overview(counts, review_due, &stats, &settings))
}

/// Study calendar for the trailing `days`, oldest first.
pub fn calendar(
    repo: &SqliteRepository,
    days: usize,
    now: DateTime<Local>,
) -> Result<Vec<CalendarDay>> {
    Ok(repo.calendar(days, now.date_naive())?)
}
