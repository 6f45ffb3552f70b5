//! Learning-event commands.
//!
//! Each command runs the day-boundary check first, applies one pure
//! scheduler transition, persists the outcome and finishes with an
//! achievement pass over the updated counters.

use chrono::{DateTime, Local, Utc};
use trainer_core::scheduler::{Scheduler, WrongBookAction};
use trainer_core::{stats as projections, streak, AchievementDef, DailyStats, WordProgress};

use super::achievements::run_achievement_pass;
use super::{require_word, Result};
use crate::db::{
    ProgressRepository, SqliteRepository, StatsRepository, WrongBookRepository,
};
use crate::notify::Notifier;

/// Outcome of one learning event.
#[derive(Debug)]
pub struct StudyOutcome {
    pub progress: WordProgress,
    pub newly_unlocked: Vec<&'static AchievementDef>,
}

/// Run the rollover check for the event's day and persist it if anything
/// changed. Must run before any command consults the today-counters.
pub(crate) fn ensure_rollover(
    repo: &SqliteRepository,
    now: DateTime<Local>,
) -> Result<DailyStats> {
    let stats = repo.get_daily_stats()?;
    let rolled = streak::roll_over(&stats, now.date_naive());
    if rolled != stats {
        repo.save_daily_stats(&rolled)?;
    }
    Ok(rolled)
}

fn apply_wrong_book(
    repo: &SqliteRepository,
    word: &str,
    action: WrongBookAction,
) -> Result<()> {
    match action {
        WrongBookAction::None => {}
        WrongBookAction::Add => repo.wrong_book_add(word)?,
        WrongBookAction::Remove => repo.wrong_book_remove(word)?,
    }
    Ok(())
}

/// First exposure to a word.
///
/// A no-op returning the current record when the word is already leveled;
/// first exposure is not re-triggerable.
pub fn learn_word(
    repo: &SqliteRepository,
    notifier: &dyn Notifier,
    word: &str,
    known: bool,
    now: DateTime<Local>,
) -> Result<StudyOutcome> {
    require_word(repo, word)?;
    let mut stats = ensure_rollover(repo, now)?;
    let current = repo.get_progress(word)?.unwrap_or_default();

    let scheduler = Scheduler::default();
    let Some(transition) = scheduler.first_exposure(&current, known, now.with_timezone(&Utc))
    else {
        return Ok(StudyOutcome {
            progress: current,
            newly_unlocked: Vec::new(),
        });
    };

    apply_wrong_book(repo, word, transition.wrong_book)?;
    repo.save_progress(word, &transition.progress)?;

    stats.today_learned += 1;
    stats.total_learned += 1;
    repo.save_daily_stats(&stats)?;
    repo.record_study_day(now.date_naive(), 1)?;

    let newly_unlocked = run_achievement_pass(repo, notifier, &stats, now)?;

    Ok(StudyOutcome {
        progress: transition.progress,
        newly_unlocked,
    })
}

/// Correct answer on review.
pub fn review_correct(
    repo: &SqliteRepository,
    notifier: &dyn Notifier,
    word: &str,
    now: DateTime<Local>,
) -> Result<StudyOutcome> {
    review(repo, notifier, word, true, now)
}

/// Wrong answer on review.
pub fn review_wrong(
    repo: &SqliteRepository,
    notifier: &dyn Notifier,
    word: &str,
    now: DateTime<Local>,
) -> Result<StudyOutcome> {
    review(repo, notifier, word, false, now)
}

fn review(
    repo: &SqliteRepository,
    notifier: &dyn Notifier,
    word: &str,
    correct: bool,
    now: DateTime<Local>,
) -> Result<StudyOutcome> {
    require_word(repo, word)?;
    let mut stats = ensure_rollover(repo, now)?;
    let current = repo.get_progress(word)?.unwrap_or_default();

    let scheduler = Scheduler::default();
    let transition = if correct {
        scheduler.record_correct(&current, now.with_timezone(&Utc))
    } else {
        scheduler.record_wrong(&current, now.with_timezone(&Utc))
    };

    apply_wrong_book(repo, word, transition.wrong_book)?;
    repo.save_progress(word, &transition.progress)?;

    if correct {
        stats.total_correct += 1;
    } else {
        stats.total_wrong += 1;
    }
    stats.today_reviewed += 1;
    repo.save_daily_stats(&stats)?;

    let newly_unlocked = run_achievement_pass(repo, notifier, &stats, now)?;

    Ok(StudyOutcome {
        progress: transition.progress,
        newly_unlocked,
    })
}

/// Words currently due for review, never-reviewed first, then by date.
pub fn due_words(
    repo: &SqliteRepository,
    now: DateTime<Local>,
) -> Result<Vec<(String, WordProgress)>> {
    let today = now.date_naive();
    let mut due: Vec<_> = repo
        .all_progress()?
        .into_iter()
        .filter(|(_, progress)| projections::is_due(progress, today))
        .collect();
    due.sort_by(|a, b| a.1.next_review.cmp(&b.1.next_review));
    Ok(due)
}

/// Restore one word to its default state and clear it from the wrong book.
pub fn reset_word(repo: &SqliteRepository, word: &str) -> Result<WordProgress> {
    require_word(repo, word)?;
    let progress = WordProgress::default();
    repo.save_progress(word, &progress)?;
    repo.wrong_book_remove(word)?;
    Ok(progress)
}

/// Wipe all learning progress, the wrong book and the daily counters.
///
/// The achievement ledger is monotonic and survives a reset.
pub fn reset_all(repo: &SqliteRepository) -> Result<()> {
    repo.delete_all_progress()?;
    repo.wrong_book_clear()?;
    repo.save_daily_stats(&DailyStats::default())?;
    Ok(())
}
