//! Core vocabulary-trainer library shared by the application crates.
//!
//! Provides:
//! - Fixed-interval review scheduler (per-item level state machine)
//! - Daily counter and streak rollover across calendar-day boundaries
//! - Rule-based achievement catalog and evaluation
//! - Read-only statistics projections
//! - Shared types (WordProgress, DailyStats, etc.)
//!
//! Everything here is pure: the current instant and date are caller-supplied
//! and persistence lives behind the application's repository layer.

pub mod achievements;
pub mod scheduler;
pub mod stats;
pub mod streak;
pub mod types;

pub use achievements::{AchievementDef, AchievementProgress, Condition, Snapshot, CATALOG};
pub use scheduler::{Scheduler, Transition, WrongBookAction};
pub use types::{
    DailyStats, LevelStatus, ProgressOverview, StudySettings, VocabCounts, Word, WordProgress,
    MAX_LEVEL,
};
