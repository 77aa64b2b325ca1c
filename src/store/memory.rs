//! In-memory Store
//!
//! A [`Store`] test double backed by plain vectors behind a
//! `tokio::sync::RwLock`. Reproduces the observable behavior of the MySQL
//! store: unique usernames, signup defaults, conditional-overwrite patches,
//! newest-first listings and affected-row counts for deletes.

use anyhow::bail;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{MistakeEntry, NotebookEntry, User};
use crate::store::{NewUser, Store, StoreResult, UserPatch};

#[derive(Debug, Clone)]
struct NotebookRow {
    user_id: i64,
    entry: NotebookEntry,
}

#[derive(Debug, Clone)]
struct MistakeRow {
    user_id: i64,
    entry: MistakeEntry,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    notebook: Vec<NotebookRow>,
    mistakes: Vec<MistakeRow>,
    next_user_id: i64,
    next_note_id: i64,
    next_mistake_id: i64,
}

/// In-memory store for tests.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_user_id: 1,
                next_note_id: 1,
                next_mistake_id: 1,
                ..Inner::default()
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        // Mirrors the unique constraint on users.username
        if inner.users.iter().any(|u| u.username == new_user.username) {
            bail!("duplicate username: {}", new_user.username);
        }
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        inner.users.push(User {
            id,
            username: new_user.username,
            password: new_user.password_hash,
            language: new_user.language,
            xp: 0,
            hearts: 5,
            streak: 0,
            unit: 0,
            lesson: 0,
            last_day: Utc::now().date_naive(),
        });
        Ok(())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn set_progress(&self, username: &str, xp: i64, hearts: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        // Unknown username is a zero-row update, still a success
        if let Some(user) = inner.users.iter_mut().find(|u| u.username == username) {
            user.xp = xp;
            user.hearts = hearts;
        }
        Ok(())
    }

    async fn patch_user(&self, patch: UserPatch) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == patch.id) {
            if let Some(xp) = patch.xp {
                user.xp = xp;
            }
            if let Some(hearts) = patch.hearts {
                user.hearts = hearts;
            }
            if let Some(unit) = patch.unit {
                user.unit = unit;
            }
            if let Some(lesson) = patch.lesson {
                user.lesson = lesson;
            }
            if let Some(streak) = patch.streak {
                user.streak = streak;
            }
            if let Some(language) = patch.language {
                user.language = language;
            }
            user.last_day = Utc::now().date_naive();
        }
        Ok(())
    }

    async fn add_notebook_entry(&self, user_id: i64, en: &str, tr: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let id = inner.next_note_id;
        inner.next_note_id += 1;
        inner.notebook.push(NotebookRow {
            user_id,
            entry: NotebookEntry {
                id,
                en_text: en.to_string(),
                tr_text: tr.to_string(),
            },
        });
        Ok(())
    }

    async fn list_notebook(&self, user_id: i64) -> StoreResult<Vec<NotebookEntry>> {
        let inner = self.inner.read().await;
        let mut items: Vec<NotebookEntry> = inner
            .notebook
            .iter()
            .filter(|row| row.user_id == user_id)
            .map(|row| row.entry.clone())
            .collect();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(items)
    }

    async fn delete_notebook_entry(&self, note_id: i64) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.notebook.len();
        inner.notebook.retain(|row| row.entry.id != note_id);
        Ok((before - inner.notebook.len()) as u64)
    }

    async fn add_mistake(&self, user_id: i64, en: &str, tr: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let id = inner.next_mistake_id;
        inner.next_mistake_id += 1;
        inner.mistakes.push(MistakeRow {
            user_id,
            entry: MistakeEntry {
                id,
                en_text: en.to_string(),
                tr_text: tr.to_string(),
                time: Utc::now(),
            },
        });
        Ok(())
    }

    async fn list_mistakes(&self, user_id: i64) -> StoreResult<Vec<MistakeEntry>> {
        let inner = self.inner.read().await;
        let mut items: Vec<MistakeEntry> = inner
            .mistakes
            .iter()
            .filter(|row| row.user_id == user_id)
            .map(|row| row.entry.clone())
            .collect();
        // Insertion id breaks timestamp ties so back-to-back inserts
        // still list newest-first
        items.sort_by(|a, b| b.time.cmp(&a.time).then(b.id.cmp(&a.id)));
        Ok(items)
    }
}
