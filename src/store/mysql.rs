//! MySQL Store
//!
//! [`Store`] implementation backed by sqlx over MySQL. Mirrors the
//! single-connection usage of the original deployment: the pool is capped
//! at one connection and every handler issues exactly one parameterized
//! statement through it. Connecting is lazy; a database that is down at
//! startup is logged and each request then fails individually.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::Config;
use crate::models::{MistakeEntry, NotebookEntry, User};
use crate::store::{NewUser, Store, StoreResult, UserPatch};

/// MySQL-backed store.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from configuration without connecting yet.
    pub fn connect_lazy(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_lazy(&config.database_url())?;
        Ok(Self { pool })
    }

    /// Checks that a connection can actually be established. Used once at
    /// startup for the "connected" log line; a failure does not stop the
    /// process.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.pool.acquire().await.map(|_| ())
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn create_user(&self, new_user: NewUser) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO users (username, password, language, xp, hearts, streak, unit, lesson, last_day) \
             VALUES (?, ?, ?, 0, 5, 0, 0, 0, CURDATE())",
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(&new_user.language)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn set_progress(&self, username: &str, xp: i64, hearts: i64) -> StoreResult<()> {
        // Zero rows affected (unknown username) still counts as success
        sqlx::query("UPDATE users SET xp = ?, hearts = ? WHERE username = ?")
            .bind(xp)
            .bind(hearts)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn patch_user(&self, patch: UserPatch) -> StoreResult<()> {
        // NULL binds fall through COALESCE and keep the stored value
        sqlx::query(
            "UPDATE users \
             SET xp = COALESCE(?, xp), \
                 hearts = COALESCE(?, hearts), \
                 unit = COALESCE(?, unit), \
                 lesson = COALESCE(?, lesson), \
                 streak = COALESCE(?, streak), \
                 language = COALESCE(?, language), \
                 last_day = CURDATE() \
             WHERE id = ?",
        )
        .bind(patch.xp)
        .bind(patch.hearts)
        .bind(patch.unit)
        .bind(patch.lesson)
        .bind(patch.streak)
        .bind(patch.language)
        .bind(patch.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_notebook_entry(&self, user_id: i64, en: &str, tr: &str) -> StoreResult<()> {
        sqlx::query("INSERT INTO notebook (user_id, en_text, tr_text) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(en)
            .bind(tr)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_notebook(&self, user_id: i64) -> StoreResult<Vec<NotebookEntry>> {
        let items = sqlx::query_as::<_, NotebookEntry>(
            "SELECT id, en_text, tr_text FROM notebook WHERE user_id = ? ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn delete_notebook_entry(&self, note_id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM notebook WHERE id = ?")
            .bind(note_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn add_mistake(&self, user_id: i64, en: &str, tr: &str) -> StoreResult<()> {
        // `time` takes the table's CURRENT_TIMESTAMP default
        sqlx::query("INSERT INTO mistakes (user_id, en_text, tr_text) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(en)
            .bind(tr)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_mistakes(&self, user_id: i64) -> StoreResult<Vec<MistakeEntry>> {
        let items = sqlx::query_as::<_, MistakeEntry>(
            "SELECT id, en_text, tr_text, time FROM mistakes WHERE user_id = ? ORDER BY time DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
