//! Command-line entry point.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trainer_core::WordProgress;
use vocab_trainer::commands::{achievements, settings, stats, study, transfer, wordbook};
use vocab_trainer::db::SqliteRepository;
use vocab_trainer::notify::LogNotifier;

#[derive(Parser)]
#[command(
    name = "trainer",
    version,
    about = "Vocabulary trainer with fixed-interval review scheduling"
)]
struct Cli {
    /// Database file; defaults to the platform data directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Answer {
    Correct,
    Wrong,
}

#[derive(Subcommand)]
enum Command {
    /// Import vocabulary from a JSON file
    Import { file: PathBuf },
    /// Record the first exposure to a word
    Learn {
        word: String,
        /// The word was already known on first sight
        #[arg(long)]
        known: bool,
    },
    /// Record a review answer for a word
    Review { word: String, answer: Answer },
    /// List words due for review
    Due,
    /// Show the progress overview
    Stats,
    /// Show the study calendar for recent days
    Calendar {
        #[arg(long, default_value_t = 14)]
        days: usize,
    },
    /// List achievements with unlock state and progress
    Achievements,
    /// Show the wrong book
    Wrongbook,
    /// List favorite words
    Favorites,
    /// Toggle a word's favorite flag
    Favorite { word: String },
    /// Show or change daily goals
    Goals {
        #[arg(long)]
        new_goal: Option<u32>,
        #[arg(long)]
        review_goal: Option<u32>,
    },
    /// Reset a single word's progress
    Reset { word: String },
    /// Wipe all learning progress
    ResetAll,
    /// Export every store to a JSON file
    Export { file: PathBuf },
    /// Restore stores from a previous export
    Restore { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let repo = SqliteRepository::open(&db_path)
        .with_context(|| format!("opening database at {}", db_path.display()))?;
    let notifier = LogNotifier;
    let now = Local::now();

    match cli.command {
        Command::Import { file } => {
            let count = transfer::import_vocabulary(&repo, &file)?;
            println!("imported {count} words");
        }
        Command::Learn { word, known } => {
            let outcome = study::learn_word(&repo, &notifier, &word, known, now)?;
            print_progress(&word, &outcome.progress);
            print_unlocked(&outcome.newly_unlocked);
        }
        Command::Review { word, answer } => {
            let outcome = match answer {
                Answer::Correct => study::review_correct(&repo, &notifier, &word, now)?,
                Answer::Wrong => study::review_wrong(&repo, &notifier, &word, now)?,
            };
            print_progress(&word, &outcome.progress);
            print_unlocked(&outcome.newly_unlocked);
        }
        Command::Due => {
            let due = study::due_words(&repo, now)?;
            if due.is_empty() {
                println!("nothing due for review");
            }
            for (word, progress) in due {
                print_progress(&word, &progress);
            }
        }
        Command::Stats => {
            let view = stats::overview(&repo, now)?;
            println!(
                "words: {} total / {} new / {} learning / {} mastered",
                view.total_words, view.new_words, view.learning_words, view.mastered_words
            );
            println!("due for review: {}", view.review_due);
            println!(
                "today: {} learned (goal {}), {} reviewed (goal {})",
                view.today_learned, view.daily_new_goal, view.today_reviewed, view.daily_review_goal
            );
            println!("streak: {} days, accuracy: {}%", view.streak, view.accuracy);
        }
        Command::Calendar { days } => {
            for day in stats::calendar(&repo, days, now)? {
                println!("{}  {}", day.day, day.learned);
            }
        }
        Command::Achievements => {
            for view in achievements::list_achievements(&repo, now)? {
                let mark = if view.unlocked_at.is_some() { "✓" } else { " " };
                match view.progress.filter(|_| view.unlocked_at.is_none()) {
                    Some(p) => println!(
                        "{mark} {} {} - {} ({}/{}, {}%)",
                        view.def.icon, view.def.name, view.def.description, p.current, p.target, p.percent
                    ),
                    None => println!(
                        "{mark} {} {} - {}",
                        view.def.icon, view.def.name, view.def.description
                    ),
                }
            }
            if let Some(next) = achievements::next_achievement(&repo, now)? {
                println!("next up: {} {}", next.def.icon, next.def.name);
            }
        }
        Command::Wrongbook => {
            for (word, progress) in wordbook::wrong_book(&repo)? {
                print_progress(&word, &progress);
            }
        }
        Command::Favorites => {
            for (word, progress) in wordbook::favorites(&repo)? {
                print_progress(&word, &progress);
            }
        }
        Command::Favorite { word } => {
            let flagged = wordbook::toggle_favorite(&repo, &word)?;
            println!(
                "{word}: {}",
                if flagged { "favorited" } else { "unfavorited" }
            );
        }
        Command::Goals {
            new_goal,
            review_goal,
        } => {
            let goals = if new_goal.is_some() || review_goal.is_some() {
                settings::update_goals(&repo, new_goal, review_goal)?
            } else {
                settings::get_goals(&repo)?
            };
            println!(
                "daily goals: {} new, {} reviews",
                goals.daily_new_goal, goals.daily_review_goal
            );
        }
        Command::Reset { word } => {
            study::reset_word(&repo, &word)?;
            println!("{word}: progress reset");
        }
        Command::ResetAll => {
            study::reset_all(&repo)?;
            println!("all learning progress wiped");
        }
        Command::Export { file } => {
            let bundle = transfer::export_to_file(&repo, &file, now.with_timezone(&Utc))?;
            println!(
                "exported {} words and {} progress records to {}",
                bundle.words.len(),
                bundle.progress.len(),
                file.display()
            );
        }
        Command::Restore { file } => {
            let bundle = transfer::import_from_file(&repo, &file)?;
            println!(
                "restored {} words and {} progress records",
                bundle.words.len(),
                bundle.progress.len()
            );
        }
    }

    Ok(())
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("no data directory available")?;
    Ok(base.join("vocab-trainer").join("trainer.db"))
}

fn print_progress(word: &str, progress: &WordProgress) {
    let next = progress
        .next_review
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let flags = match (progress.is_favorite, progress.is_in_wrong_book) {
        (true, true) => " [fav, wrong-book]",
        (true, false) => " [fav]",
        (false, true) => " [wrong-book]",
        (false, false) => "",
    };
    println!(
        "{word}: level {} ({}), next review {next}, {} correct / {} wrong{flags}",
        progress.level,
        progress.status().as_str(),
        progress.correct_count,
        progress.wrong_count
    );
}

fn print_unlocked(defs: &[&'static trainer_core::AchievementDef]) {
    for def in defs {
        println!("🎉 achievement unlocked: {} {}", def.icon, def.name);
    }
}
