//! Store Module
//!
//! Persistence behind the request handlers. The [`Store`] trait is the seam
//! between handlers and the database: the router holds an injectable
//! `Arc<dyn Store>` instead of a process-global connection handle, so tests
//! can swap in [`MemoryStore`].
//!
//! Every operation is a single statement; atomicity is whatever the store
//! gives a single statement. No transactions, no retries.

mod memory;
mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

use async_trait::async_trait;

use crate::models::{MistakeEntry, NotebookEntry, User};

/// Result type for store operations. Failure detail stays server-side; the
/// handlers collapse it to a generic per-operation message.
pub type StoreResult<T> = anyhow::Result<T>;

/// Column values for a new user row. Progress fields start at their signup
/// defaults (`xp=0, hearts=5, streak=0, unit=0, lesson=0, last_day=today`)
/// inside the store itself.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    /// Already bcrypt-hashed; the store never sees a plaintext password
    pub password_hash: String,
    pub language: String,
}

/// Partial overwrite of a user's progress columns. `None` keeps the stored
/// value, `Some` overwrites it. `last_day` is always refreshed to today.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub id: i64,
    pub xp: Option<i64>,
    pub hearts: Option<i64>,
    pub unit: Option<i64>,
    pub lesson: Option<i64>,
    pub streak: Option<i64>,
    pub language: Option<String>,
}

/// Persistence operations, one per API operation.
#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a new user row. A duplicate username surfaces as an error
    /// from the unique constraint, not from an advance check.
    async fn create_user(&self, new_user: NewUser) -> StoreResult<()>;

    /// Fetches a user row by username, if one exists.
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Unconditionally overwrites `xp` and `hearts` for the named user.
    /// A zero-row update is not an error.
    async fn set_progress(&self, username: &str, xp: i64, hearts: i64) -> StoreResult<()>;

    /// Applies a conditional per-field overwrite to the user's progress
    /// columns and refreshes `last_day` to today.
    async fn patch_user(&self, patch: UserPatch) -> StoreResult<()>;

    /// Inserts a notebook entry.
    async fn add_notebook_entry(&self, user_id: i64, en: &str, tr: &str) -> StoreResult<()>;

    /// Lists a user's notebook entries, most recently inserted first.
    async fn list_notebook(&self, user_id: i64) -> StoreResult<Vec<NotebookEntry>>;

    /// Deletes a notebook entry by id, returning the affected-row count.
    async fn delete_notebook_entry(&self, note_id: i64) -> StoreResult<u64>;

    /// Inserts a mistake entry with a server-assigned timestamp.
    async fn add_mistake(&self, user_id: i64, en: &str, tr: &str) -> StoreResult<()>;

    /// Lists a user's mistakes, most recent first.
    async fn list_mistakes(&self, user_id: i64) -> StoreResult<Vec<MistakeEntry>>;
}
