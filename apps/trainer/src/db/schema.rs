//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local SQLite database.
pub const SCHEMA: &str = r#"
-- Vocabulary catalog
CREATE TABLE IF NOT EXISTS words (
    word TEXT PRIMARY KEY,
    phonetic TEXT NOT NULL DEFAULT '',
    translation TEXT NOT NULL DEFAULT ''
);

-- Per-item learning progress
CREATE TABLE IF NOT EXISTS word_progress (
    word TEXT PRIMARY KEY,
    level INTEGER NOT NULL DEFAULT 0,
    next_review TEXT,
    correct_count INTEGER NOT NULL DEFAULT 0,
    wrong_count INTEGER NOT NULL DEFAULT 0,
    last_studied TEXT,
    is_favorite INTEGER NOT NULL DEFAULT 0,
    is_in_wrong_book INTEGER NOT NULL DEFAULT 0
);

-- Lifetime and per-day counters (singleton row)
CREATE TABLE IF NOT EXISTS daily_stats (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    total_learned INTEGER NOT NULL DEFAULT 0,
    total_correct INTEGER NOT NULL DEFAULT 0,
    total_wrong INTEGER NOT NULL DEFAULT 0,
    today_learned INTEGER NOT NULL DEFAULT 0,
    today_reviewed INTEGER NOT NULL DEFAULT 0,
    streak INTEGER NOT NULL DEFAULT 0,
    last_study_date TEXT
);

-- Study configuration (singleton row)
CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    daily_new_goal INTEGER NOT NULL DEFAULT 20,
    daily_review_goal INTEGER NOT NULL DEFAULT 50
);

-- Items flagged for remedial review
CREATE TABLE IF NOT EXISTS wrong_book (
    word TEXT PRIMARY KEY
);

-- Unlock ledger; rows are never updated or deleted
CREATE TABLE IF NOT EXISTS achievements (
    id TEXT PRIMARY KEY,
    unlocked_at TEXT NOT NULL
);

-- Words learned per calendar day
CREATE TABLE IF NOT EXISTS study_calendar (
    day TEXT PRIMARY KEY,
    learned INTEGER NOT NULL DEFAULT 0
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_progress_next_review ON word_progress(next_review);
CREATE INDEX IF NOT EXISTS idx_progress_level ON word_progress(level);
"#;

/// Initialize the daily stats row if not exists.
pub const INIT_DAILY_STATS: &str = r#"
INSERT OR IGNORE INTO daily_stats (id) VALUES (1);
"#;

/// Initialize the settings row if not exists.
pub const INIT_SETTINGS: &str = r#"
INSERT OR IGNORE INTO settings (id) VALUES (1);
"#;
