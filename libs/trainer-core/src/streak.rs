//! Day-boundary rollover for daily counters and the study streak.

use crate::types::DailyStats;
use chrono::NaiveDate;

/// Apply the day-boundary check for `today`.
///
/// Idempotent: once `last_study_date` equals `today` further calls return
/// the stats unchanged. On a new day the today-counters reset and the streak
/// extends on a consecutive day or breaks to 0 after a gap. The date is
/// caller-supplied so rollover stays deterministic under test.
pub fn roll_over(stats: &DailyStats, today: NaiveDate) -> DailyStats {
    let mut stats = stats.clone();

    match stats.last_study_date {
        Some(last) if last == today => return stats,
        Some(last) => {
            let gap = (today - last).num_days();
            if gap == 1 {
                stats.streak += 1;
            } else if gap > 1 {
                stats.streak = 0;
            }
        }
        // First-ever use: the streak only starts counting from day two.
        None => {}
    }

    stats.today_learned = 0;
    stats.today_reviewed = 0;
    stats.last_study_date = Some(today);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(date: &str) -> NaiveDate {
        date.parse().unwrap()
    }

    #[test]
    fn first_use_keeps_streak_at_zero() {
        let stats = roll_over(&DailyStats::default(), day("2024-03-01"));
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.last_study_date, Some(day("2024-03-01")));
    }

    #[test]
    fn same_day_is_a_no_op() {
        let stats = DailyStats {
            today_learned: 7,
            today_reviewed: 3,
            streak: 2,
            last_study_date: Some(day("2024-03-01")),
            ..Default::default()
        };
        let rolled = roll_over(&stats, day("2024-03-01"));
        assert_eq!(rolled, stats);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let stats = DailyStats {
            today_learned: 7,
            streak: 2,
            last_study_date: Some(day("2024-03-01")),
            ..Default::default()
        };
        let rolled = roll_over(&stats, day("2024-03-02"));
        assert_eq!(rolled.streak, 3);
        assert_eq!(rolled.today_learned, 0);
        assert_eq!(rolled.today_reviewed, 0);
        assert_eq!(rolled.last_study_date, Some(day("2024-03-02")));
    }

    #[test]
    fn skipped_day_breaks_streak() {
        let stats = DailyStats {
            streak: 5,
            last_study_date: Some(day("2024-03-01")),
            ..Default::default()
        };
        let rolled = roll_over(&stats, day("2024-03-03"));
        assert_eq!(rolled.streak, 0);
    }

    #[test]
    fn rollover_is_idempotent_within_a_day() {
        let stats = DailyStats {
            streak: 1,
            last_study_date: Some(day("2024-03-01")),
            ..Default::default()
        };
        let once = roll_over(&stats, day("2024-03-02"));
        let twice = roll_over(&once, day("2024-03-02"));
        assert_eq!(once, twice);
    }

    #[test]
    fn study_every_other_day_never_builds_a_streak() {
        // Day 1 study, day 2 study, skip day 3, study day 4.
        let mut stats = roll_over(&DailyStats::default(), day("2024-03-01"));
        assert_eq!(stats.streak, 0);
        stats = roll_over(&stats, day("2024-03-02"));
        assert_eq!(stats.streak, 1);
        stats = roll_over(&stats, day("2024-03-04"));
        assert_eq!(stats.streak, 0);
    }
}
