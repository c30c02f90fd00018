//! SQL DDL for initializing the link storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never reused
/// - `url` TEXT with no uniqueness or format constraint
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT
);
"#;
