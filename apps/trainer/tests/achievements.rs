//! Achievement engine integration tests: unlock flow, idempotence and
//! ledger monotonicity against the real repository.

mod common;

use common::{at, TestContext};
use pretty_assertions::assert_eq;
use vocab_trainer::commands::{achievements, settings, study};
use vocab_trainer::db::AchievementRepository;

#[test]
fn first_word_unlocks_on_the_same_pass() {
    let ctx = TestContext::with_words(&["ability"]);
    let outcome = study::learn_word(&ctx.repo, &ctx.notifier, "ability", true, at(2024, 3, 1, 9))
        .unwrap();

    let ids: Vec<_> = outcome.newly_unlocked.iter().map(|d| d.id).collect();
    assert!(ids.contains(&"first_word"));
    assert!(ctx
        .repo
        .unlocked_ids()
        .unwrap()
        .contains(&"first_word".to_string()));
}

#[test]
fn unlocks_are_idempotent_across_passes() {
    let ctx = TestContext::with_words(&["ability", "accept"]);
    let first = study::learn_word(&ctx.repo, &ctx.notifier, "ability", true, at(2024, 3, 1, 9))
        .unwrap();
    assert!(!first.newly_unlocked.is_empty());

    // Nothing new crosses a threshold on the second event.
    let second = study::learn_word(&ctx.repo, &ctx.notifier, "accept", true, at(2024, 3, 1, 10))
        .unwrap();
    assert!(second.newly_unlocked.is_empty());
}

#[test]
fn time_window_achievements_use_the_event_hour() {
    let ctx = TestContext::with_words(&["ability"]);
    let outcome = study::learn_word(&ctx.repo, &ctx.notifier, "ability", true, at(2024, 3, 3, 2))
        .unwrap();

    let ids: Vec<_> = outcome.newly_unlocked.iter().map(|d| d.id).collect();
    assert!(ids.contains(&"night_owl"));
    assert!(!ids.contains(&"early_bird"));
}

#[test]
fn daytime_events_leave_time_windows_locked() {
    let ctx = TestContext::with_words(&["ability"]);
    study::learn_word(&ctx.repo, &ctx.notifier, "ability", true, at(2024, 3, 1, 14)).unwrap();

    let unlocked = ctx.repo.unlocked_ids().unwrap();
    assert!(!unlocked.contains(&"night_owl".to_string()));
    assert!(!unlocked.contains(&"early_bird".to_string()));
}

#[test]
fn daily_goal_unlocks_when_goal_is_met() {
    let ctx = TestContext::with_words(&["a", "b"]);
    settings::update_goals(&ctx.repo, Some(2), None).unwrap();

    study::learn_word(&ctx.repo, &ctx.notifier, "a", true, at(2024, 3, 1, 9)).unwrap();
    let outcome =
        study::learn_word(&ctx.repo, &ctx.notifier, "b", true, at(2024, 3, 1, 10)).unwrap();

    let ids: Vec<_> = outcome.newly_unlocked.iter().map(|d| d.id).collect();
    assert!(ids.contains(&"daily_goal"));
}

#[test]
fn accuracy_achievement_requires_enough_answers() {
    let ctx = TestContext::with_words(&["ability"]);
    study::learn_word(&ctx.repo, &ctx.notifier, "ability", true, at(2024, 3, 1, 9)).unwrap();

    let mut unlocked_at_49 = false;
    let mut unlocked_at_50 = false;
    for round in 1..=50u32 {
        let outcome =
            study::review_correct(&ctx.repo, &ctx.notifier, "ability", at(2024, 3, 1, 10))
                .unwrap();
        let hit = outcome.newly_unlocked.iter().any(|d| d.id == "accuracy_80");
        if round == 49 {
            unlocked_at_49 = hit;
        }
        if round == 50 {
            unlocked_at_50 = hit;
        }
    }

    // 100% accuracy the whole way, but the floor is 50 answers.
    assert!(!unlocked_at_49);
    assert!(unlocked_at_50);
}

#[test]
fn ledger_timestamps_never_change() {
    let ctx = TestContext::with_words(&["a", "b"]);
    study::learn_word(&ctx.repo, &ctx.notifier, "a", true, at(2024, 3, 1, 9)).unwrap();
    let before = ctx.repo.unlocked_achievements().unwrap();

    study::learn_word(&ctx.repo, &ctx.notifier, "b", true, at(2024, 3, 2, 9)).unwrap();
    let after = ctx.repo.unlocked_achievements().unwrap();

    let ts = |entries: &[(String, chrono::DateTime<chrono::Utc>)]| {
        entries
            .iter()
            .find(|(id, _)| id == "first_word")
            .map(|(_, t)| *t)
    };
    assert_eq!(ts(&before), ts(&after));
}

#[test]
fn next_achievement_walks_the_priority_list() {
    let ctx = TestContext::with_words(&["ability"]);
    let now = at(2024, 3, 1, 9);

    let next = achievements::next_achievement(&ctx.repo, now).unwrap().unwrap();
    assert_eq!(next.def.id, "first_word");

    study::learn_word(&ctx.repo, &ctx.notifier, "ability", true, now).unwrap();
    let next = achievements::next_achievement(&ctx.repo, now).unwrap().unwrap();
    assert_eq!(next.def.id, "words_50");

    let progress = next.progress.unwrap();
    assert_eq!(progress.current, 1);
    assert_eq!(progress.target, 50);
    assert_eq!(progress.percent, 2);
}

#[test]
fn catalog_listing_marks_unlock_state() {
    let ctx = TestContext::with_words(&["ability"]);
    let now = at(2024, 3, 1, 9);
    study::learn_word(&ctx.repo, &ctx.notifier, "ability", true, now).unwrap();

    let views = achievements::list_achievements(&ctx.repo, now).unwrap();
    let first = views.iter().find(|v| v.def.id == "first_word").unwrap();
    assert!(first.unlocked_at.is_some());

    let fifty = views.iter().find(|v| v.def.id == "words_50").unwrap();
    assert!(fifty.unlocked_at.is_none());
    assert_eq!(fifty.progress.unwrap().current, 1);
}
