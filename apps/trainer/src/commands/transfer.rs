//! Bulk export and import: a pass-through over every store.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trainer_core::{DailyStats, StudySettings, Word, WordProgress};

use super::Result;
use crate::db::{
    AchievementRepository, CalendarDay, ProgressRepository, SettingsRepository, SqliteRepository,
    StatsRepository, VocabularyRepository, WrongBookRepository,
};

/// Full data dump of the trainer's stores.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportBundle {
    pub exported_at: DateTime<Utc>,
    pub words: Vec<Word>,
    pub progress: BTreeMap<String, WordProgress>,
    pub daily_stats: DailyStats,
    pub settings: StudySettings,
    pub wrong_book: Vec<String>,
    pub achievements: BTreeMap<String, DateTime<Utc>>,
    pub calendar: Vec<CalendarDay>,
}

pub fn export_data(repo: &SqliteRepository, now: DateTime<Utc>) -> Result<ExportBundle> {
    Ok(ExportBundle {
        exported_at: now,
        words: repo.all_words()?,
        progress: repo.all_progress()?.into_iter().collect(),
        daily_stats: repo.get_daily_stats()?,
        settings: repo.get_settings()?,
        wrong_book: repo.wrong_book_ids()?,
        achievements: repo.unlocked_achievements()?.into_iter().collect(),
        calendar: repo.calendar_all()?,
    })
}

pub fn export_to_file(
    repo: &SqliteRepository,
    path: &Path,
    now: DateTime<Utc>,
) -> Result<ExportBundle> {
    let bundle = export_data(repo, now)?;
    fs::write(path, serde_json::to_string_pretty(&bundle)?)?;
    Ok(bundle)
}

/// Restore every store from a bundle. Ledger entries keep their original
/// timestamps; existing ones are never overwritten.
pub fn import_data(repo: &SqliteRepository, bundle: &ExportBundle) -> Result<()> {
    repo.upsert_words(&bundle.words)?;
    for (word, progress) in &bundle.progress {
        repo.save_progress(word, progress)?;
    }
    repo.save_daily_stats(&bundle.daily_stats)?;
    repo.save_settings(&bundle.settings)?;

    repo.wrong_book_clear()?;
    for word in &bundle.wrong_book {
        repo.wrong_book_add(word)?;
    }

    for (id, unlocked_at) in &bundle.achievements {
        repo.restore_achievement(id, *unlocked_at)?;
    }
    for day in &bundle.calendar {
        repo.restore_calendar_day(day)?;
    }
    Ok(())
}

pub fn import_from_file(repo: &SqliteRepository, path: &Path) -> Result<ExportBundle> {
    let content = fs::read_to_string(path)?;
    let bundle: ExportBundle = serde_json::from_str(&content)?;
    import_data(repo, &bundle)?;
    Ok(bundle)
}

/// Import vocabulary entries from a JSON array of words.
pub fn import_vocabulary(repo: &SqliteRepository, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let words: Vec<Word> = serde_json::from_str(&content)?;
    Ok(repo.upsert_words(&words)?)
}
