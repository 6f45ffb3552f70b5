//! Notification sink for unlocked achievements.

use trainer_core::AchievementDef;

/// Receives "achievement unlocked" events; how they are rendered is the
/// consumer's business.
pub trait Notifier {
    fn achievement_unlocked(&self, def: &AchievementDef);
}

/// Reports unlocks through `tracing`.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn achievement_unlocked(&self, def: &AchievementDef) {
        tracing::info!(id = def.id, name = def.name, "achievement unlocked");
    }
}

/// Discards events; useful in tests that only care about return values.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn achievement_unlocked(&self, _def: &AchievementDef) {}
}
