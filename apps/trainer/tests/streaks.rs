//! Day-boundary and streak integration tests.

mod common;

use common::{at, TestContext};
use pretty_assertions::assert_eq;
use vocab_trainer::commands::{stats, study};
use vocab_trainer::db::StatsRepository;

#[test]
fn consecutive_days_build_streak() {
    let ctx = TestContext::with_words(&["a", "b", "c"]);

    // Day 1: first-ever study, streak stays 0.
    study::learn_word(&ctx.repo, &ctx.notifier, "a", true, at(2024, 3, 1, 9)).unwrap();
    assert_eq!(ctx.repo.get_daily_stats().unwrap().streak, 0);

    // Day 2: consecutive, streak becomes 1.
    study::learn_word(&ctx.repo, &ctx.notifier, "b", true, at(2024, 3, 2, 9)).unwrap();
    assert_eq!(ctx.repo.get_daily_stats().unwrap().streak, 1);

    // Skip day 3; day 4 breaks the streak back to 0.
    study::learn_word(&ctx.repo, &ctx.notifier, "c", true, at(2024, 3, 4, 9)).unwrap();
    assert_eq!(ctx.repo.get_daily_stats().unwrap().streak, 0);
}

#[test]
fn today_counters_reset_at_rollover() {
    let ctx = TestContext::with_words(&["a", "b", "c"]);
    study::learn_word(&ctx.repo, &ctx.notifier, "a", true, at(2024, 3, 1, 9)).unwrap();
    study::learn_word(&ctx.repo, &ctx.notifier, "b", true, at(2024, 3, 1, 11)).unwrap();

    let stats = ctx.repo.get_daily_stats().unwrap();
    assert_eq!(stats.today_learned, 2);

    study::learn_word(&ctx.repo, &ctx.notifier, "c", true, at(2024, 3, 2, 9)).unwrap();
    let stats = ctx.repo.get_daily_stats().unwrap();
    assert_eq!(stats.today_learned, 1);
    assert_eq!(stats.total_learned, 3);
}

#[test]
fn same_day_events_never_roll_twice() {
    let ctx = TestContext::with_words(&["a", "b"]);
    study::learn_word(&ctx.repo, &ctx.notifier, "a", true, at(2024, 3, 1, 9)).unwrap();
    study::learn_word(&ctx.repo, &ctx.notifier, "b", true, at(2024, 3, 2, 8)).unwrap();

    // A later event the same day must not extend the streak again.
    study::review_correct(&ctx.repo, &ctx.notifier, "a", at(2024, 3, 2, 21)).unwrap();
    assert_eq!(ctx.repo.get_daily_stats().unwrap().streak, 1);
}

#[test]
fn overview_combines_counts_goals_and_accuracy() {
    let ctx = TestContext::with_words(&["a", "b", "c", "d"]);
    let day1 = at(2024, 3, 1, 9);
    study::learn_word(&ctx.repo, &ctx.notifier, "a", true, day1).unwrap();
    study::learn_word(&ctx.repo, &ctx.notifier, "b", false, day1).unwrap();
    study::review_correct(&ctx.repo, &ctx.notifier, "a", day1).unwrap();
    study::review_wrong(&ctx.repo, &ctx.notifier, "b", day1).unwrap();

    let view = stats::overview(&ctx.repo, day1).unwrap();
    assert_eq!(view.total_words, 4);
    assert_eq!(view.new_words, 2);
    assert_eq!(view.learning_words, 2);
    assert_eq!(view.mastered_words, 0);
    assert_eq!(view.today_learned, 2);
    assert_eq!(view.today_reviewed, 2);
    assert_eq!(view.accuracy, 50);
    assert_eq!(view.daily_new_goal, 20);
}

#[test]
fn calendar_records_learned_words_per_day() {
    let ctx = TestContext::with_words(&["a", "b", "c"]);
    study::learn_word(&ctx.repo, &ctx.notifier, "a", true, at(2024, 3, 1, 9)).unwrap();
    study::learn_word(&ctx.repo, &ctx.notifier, "b", true, at(2024, 3, 1, 10)).unwrap();
    study::learn_word(&ctx.repo, &ctx.notifier, "c", true, at(2024, 3, 2, 9)).unwrap();

    let data = stats::calendar(&ctx.repo, 2, at(2024, 3, 2, 12)).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].day, "2024-03-01");
    assert_eq!(data[0].learned, 2);
    assert_eq!(data[1].day, "2024-03-02");
    assert_eq!(data[1].learned, 1);
}
