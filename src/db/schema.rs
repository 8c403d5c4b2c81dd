//! SQL DDL for initializing the student storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so deleted ids are never handed out again
/// - `name`, `age`, `grade` all NOT NULL
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    grade TEXT NOT NULL
);
"#;
