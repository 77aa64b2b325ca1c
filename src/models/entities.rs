//! Persisted entities
//!
//! Row types for the `users`, `notebook` and `mistakes` tables. Each derives
//! [`sqlx::FromRow`] for the MySQL store and `Serialize` for the parts that
//! are returned to clients.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A row in the `users` table.
///
/// The password column holds a bcrypt hash and is never serialized into a
/// response body.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// bcrypt hash, server-side only
    #[serde(skip_serializing)]
    pub password: String,
    /// Target learning language, free-form
    pub language: String,
    pub xp: i64,
    /// Remaining lives, initialized to 5 on signup
    pub hearts: i64,
    /// Consecutive-day count; computed by the caller, only stored here
    pub streak: i64,
    pub unit: i64,
    pub lesson: i64,
    /// Date of last recorded activity
    pub last_day: NaiveDate,
}

/// A saved source/target vocabulary pair in the `notebook` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct NotebookEntry {
    pub id: i64,
    pub en_text: String,
    pub tr_text: String,
}

/// A logged incorrect-answer pair in the `mistakes` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MistakeEntry {
    pub id: i64,
    pub en_text: String,
    pub tr_text: String,
    /// Server-assigned insertion timestamp
    pub time: DateTime<Utc>,
}
