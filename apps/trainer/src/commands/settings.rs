//! Study-settings commands.

use trainer_core::StudySettings;

use super::Result;
use crate::db::{SettingsRepository, SqliteRepository};

pub fn get_goals(repo: &SqliteRepository) -> Result<StudySettings> {
    Ok(repo.get_settings()?)
}

/// Update the daily goals; `None` keeps the current value.
pub fn update_goals(
    repo: &SqliteRepository,
    new_goal: Option<u32>,
    review_goal: Option<u32>,
) -> Result<StudySettings> {
    let mut settings = repo.get_settings()?;
    if let Some(goal) = new_goal {
        settings.daily_new_goal = goal;
    }
    if let Some(goal) = review_goal {
        settings.daily_review_goal = goal;
    }
    repo.save_settings(&settings)?;
    Ok(settings)
}
