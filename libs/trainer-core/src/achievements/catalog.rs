//! Static achievement catalog.
//!
//! Definitions are data: each carries a typed condition that an interpreter
//! evaluates against a snapshot, so the catalog can be listed, serialized
//! and tested without running arbitrary code.

use serde::Serialize;

/// Unlock condition, interpreted against a [`Snapshot`](super::Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    TotalLearnedAtLeast(u32),
    StreakAtLeast(u32),
    AccuracyAtLeast { percent: u32, min_answers: u32 },
    MasteredAtLeast(u32),
    DailyGoalReached,
    /// Evaluation-time wall-clock hour in `[start, end)`.
    HourBetween { start: u32, end: u32 },
}

/// One achievement definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub condition: Condition,
}

/// Full catalog in display order.
pub const CATALOG: &[AchievementDef] = &[
    // Learning milestones
    AchievementDef {
        id: "first_word",
        name: "First Steps",
        description: "Learn your first word",
        icon: "🌱",
        condition: Condition::TotalLearnedAtLeast(1),
    },
    AchievementDef {
        id: "words_50",
        name: "Apprentice",
        description: "Learn 50 words",
        icon: "📖",
        condition: Condition::TotalLearnedAtLeast(50),
    },
    AchievementDef {
        id: "words_100",
        name: "Word Collector",
        description: "Learn 100 words",
        icon: "📚",
        condition: Condition::TotalLearnedAtLeast(100),
    },
    AchievementDef {
        id: "words_500",
        name: "Vocabulary Builder",
        description: "Learn 500 words",
        icon: "🎓",
        condition: Condition::TotalLearnedAtLeast(500),
    },
    AchievementDef {
        id: "words_1000",
        name: "Word Expert",
        description: "Learn 1000 words",
        icon: "🏅",
        condition: Condition::TotalLearnedAtLeast(1000),
    },
    AchievementDef {
        id: "words_2000",
        name: "Word Master",
        description: "Learn 2000 words",
        icon: "👑",
        condition: Condition::TotalLearnedAtLeast(2000),
    },
    AchievementDef {
        id: "words_3500",
        name: "Lexicon Champion",
        description: "Learn all 3500 words",
        icon: "🏆",
        condition: Condition::TotalLearnedAtLeast(3500),
    },
    // Streaks
    AchievementDef {
        id: "streak_3",
        name: "Warming Up",
        description: "Study 3 days in a row",
        icon: "🔥",
        condition: Condition::StreakAtLeast(3),
    },
    AchievementDef {
        id: "streak_7",
        name: "Full Week",
        description: "Study 7 days in a row",
        icon: "💪",
        condition: Condition::StreakAtLeast(7),
    },
    AchievementDef {
        id: "streak_30",
        name: "Monthly Star",
        description: "Study 30 days in a row",
        icon: "⭐",
        condition: Condition::StreakAtLeast(30),
    },
    AchievementDef {
        id: "streak_100",
        name: "Centurion",
        description: "Study 100 days in a row",
        icon: "🌟",
        condition: Condition::StreakAtLeast(100),
    },
    AchievementDef {
        id: "streak_365",
        name: "Year-Round Scholar",
        description: "Study 365 days in a row",
        icon: "💎",
        condition: Condition::StreakAtLeast(365),
    },
    // Accuracy
    AchievementDef {
        id: "accuracy_80",
        name: "Steady Hand",
        description: "Reach 80% accuracy",
        icon: "🎯",
        condition: Condition::AccuracyAtLeast {
            percent: 80,
            min_answers: 50,
        },
    },
    AchievementDef {
        id: "accuracy_90",
        name: "Sharp Memory",
        description: "Reach 90% accuracy",
        icon: "🎪",
        condition: Condition::AccuracyAtLeast {
            percent: 90,
            min_answers: 100,
        },
    },
    AchievementDef {
        id: "accuracy_95",
        name: "Photographic",
        description: "Reach 95% accuracy",
        icon: "🧠",
        condition: Condition::AccuracyAtLeast {
            percent: 95,
            min_answers: 200,
        },
    },
    // Mastery milestones
    AchievementDef {
        id: "mastered_50",
        name: "Taking Root",
        description: "Master 50 words",
        icon: "✅",
        condition: Condition::MasteredAtLeast(50),
    },
    AchievementDef {
        id: "mastered_200",
        name: "Solid Ground",
        description: "Master 200 words",
        icon: "🌈",
        condition: Condition::MasteredAtLeast(200),
    },
    AchievementDef {
        id: "mastered_500",
        name: "Second Nature",
        description: "Master 500 words",
        icon: "🚀",
        condition: Condition::MasteredAtLeast(500),
    },
    AchievementDef {
        id: "mastered_1000",
        name: "Walking Dictionary",
        description: "Master 1000 words",
        icon: "🎖️",
        condition: Condition::MasteredAtLeast(1000),
    },
    // Special
    AchievementDef {
        id: "daily_goal",
        name: "Plan Complete",
        description: "Hit your daily learning goal",
        icon: "📅",
        condition: Condition::DailyGoalReached,
    },
    AchievementDef {
        id: "night_owl",
        name: "Night Owl",
        description: "Study in the small hours",
        icon: "🦉",
        condition: Condition::HourBetween { start: 0, end: 5 },
    },
    AchievementDef {
        id: "early_bird",
        name: "Early Bird",
        description: "Study before six in the morning",
        icon: "🐦",
        condition: Condition::HourBetween { start: 5, end: 6 },
    },
];

/// Priority order used to suggest the next achievement to chase.
pub const NEXT_UP_ORDER: &[&str] = &[
    "first_word",
    "words_50",
    "words_100",
    "streak_3",
    "streak_7",
    "mastered_50",
    "accuracy_80",
];

/// Look up a definition by id.
pub fn get(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, def) in CATALOG.iter().enumerate() {
            assert!(
                !CATALOG[i + 1..].iter().any(|other| other.id == def.id),
                "duplicate id {}",
                def.id
            );
        }
    }

    #[test]
    fn priority_order_entries_exist() {
        for id in NEXT_UP_ORDER {
            assert!(get(id).is_some(), "unknown id {id}");
        }
    }
}
