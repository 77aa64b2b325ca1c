//! API Handlers
//!
//! One handler per operation. Each validates field presence, issues exactly
//! one store call (signup and login also run one bcrypt operation), and maps
//! the outcome to the `{success, ...}` envelope. Handlers never call each
//! other and hold no state beyond the shared store.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::error;

use crate::error::{ApiError, Result};
use crate::models::{
    AckResponse, ItemsResponse, LoginRequest, LoginResponse, MistakeAddRequest, MistakeEntry,
    NotebookAddRequest, NotebookEntry, ProgressRequest, SignupRequest, UpdateRequest,
};
use crate::store::{NewUser, Store, UserPatch};

/// Fixed bcrypt work factor, not configurable.
const HASH_COST: u32 = 10;

/// Application state shared across all handlers.
///
/// Holds the injectable store client; there is no other shared mutable
/// state in the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// Handler for GET /
///
/// Static liveness text; the only non-envelope response in the API.
pub async fn liveness_handler() -> &'static str {
    "Language Buddy Backend is Running"
}

/// Handler for POST /api/signup
///
/// Hashes the password and inserts a new user with signup defaults. A
/// duplicate username fails inside the insert and is reported with the
/// same generic message as any other insert failure.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AckResponse>> {
    if let Some(msg) = req.validate() {
        return Err(ApiError::Validation(msg));
    }
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let language = req.language.unwrap_or_default();

    let password_hash = bcrypt::hash(&password, HASH_COST).map_err(|e| {
        error!(error = %e, "password hashing failed");
        ApiError::Hashing
    })?;

    state
        .store
        .create_user(NewUser {
            username,
            password_hash,
            language,
        })
        .await
        .map_err(|e| ApiError::db("Unable to create user", e))?;

    Ok(Json(AckResponse::ok()))
}

/// Handler for POST /api/login
///
/// Looks the user up by username and verifies the password against the
/// stored hash. "User not found" and "Wrong password" stay distinguishable
/// in the error message.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if let Some(msg) = req.validate() {
        return Err(ApiError::Validation(msg));
    }
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = state
        .store
        .find_user_by_username(&username)
        .await
        .map_err(|e| ApiError::db("DB error", e))?
        .ok_or(ApiError::UserNotFound)?;

    let matches = bcrypt::verify(&password, &user.password).map_err(|_| ApiError::Auth)?;
    if !matches {
        return Err(ApiError::WrongPassword);
    }

    Ok(Json(LoginResponse::new(user)))
}

/// Handler for POST /api/update-progress
///
/// The simple progress update: overwrites xp and hearts unconditionally.
/// Does not check that the user exists; a zero-row update reports success.
/// There is no up-front presence check either: an absent counter binds as
/// NULL into a non-nullable column and fails the update, and an absent
/// username matches no row, same as an unknown one.
pub async fn update_progress_handler(
    State(state): State<AppState>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<AckResponse>> {
    let (Some(xp), Some(hearts)) = (req.xp, req.hearts) else {
        return Err(ApiError::db(
            "DB update failed",
            anyhow!("xp/hearts bind as NULL into non-nullable columns"),
        ));
    };

    if let Some(username) = req.username {
        state
            .store
            .set_progress(&username, xp, hearts)
            .await
            .map_err(|e| ApiError::db("DB update failed", e))?;
    }

    Ok(Json(AckResponse::ok()))
}

/// Handler for POST /api/update
///
/// The partial progress update: each field present in the body overwrites
/// its column, each absent field keeps the stored value, and `last_day` is
/// always refreshed to today.
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<AckResponse>> {
    if let Some(msg) = req.validate() {
        return Err(ApiError::Validation(msg));
    }

    let patch = UserPatch {
        id: req.id.unwrap_or_default(),
        xp: req.xp,
        hearts: req.hearts,
        unit: req.unit,
        lesson: req.lesson,
        streak: req.streak,
        language: req.language,
    };

    state
        .store
        .patch_user(patch)
        .await
        .map_err(|e| ApiError::db("DB update error", e))?;

    Ok(Json(AckResponse::message("updated")))
}

/// Handler for POST /api/notebook/add
pub async fn notebook_add_handler(
    State(state): State<AppState>,
    Json(req): Json<NotebookAddRequest>,
) -> Result<Json<AckResponse>> {
    if let Some(msg) = req.validate() {
        return Err(ApiError::Validation(msg));
    }

    state
        .store
        .add_notebook_entry(
            req.user_id.unwrap_or_default(),
            req.en.as_deref().unwrap_or_default(),
            req.tr.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|e| ApiError::db("DB insert error", e))?;

    Ok(Json(AckResponse::message("saved")))
}

/// Handler for GET /api/notebook/:id
///
/// Lists the user's notebook entries, most recently inserted first.
pub async fn notebook_list_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ItemsResponse<NotebookEntry>>> {
    let items = state
        .store
        .list_notebook(user_id)
        .await
        .map_err(|e| ApiError::db("DB fetch error", e))?;

    Ok(Json(ItemsResponse::new(items)))
}

/// Handler for DELETE /api/notebook/delete/:note_id
///
/// A zero-row delete reports "Note not found", so deleting the same id
/// twice fails the second time even though the end state is identical.
pub async fn notebook_delete_handler(
    State(state): State<AppState>,
    Path(note_id): Path<i64>,
) -> Result<Json<AckResponse>> {
    let affected = state
        .store
        .delete_notebook_entry(note_id)
        .await
        .map_err(|e| ApiError::db("DB delete error", e))?;

    if affected == 0 {
        return Err(ApiError::NoteNotFound);
    }

    Ok(Json(AckResponse::message("deleted")))
}

/// Handler for POST /api/mistake
pub async fn mistake_add_handler(
    State(state): State<AppState>,
    Json(req): Json<MistakeAddRequest>,
) -> Result<Json<AckResponse>> {
    if let Some(msg) = req.validate() {
        return Err(ApiError::Validation(msg));
    }

    state
        .store
        .add_mistake(
            req.user_id.unwrap_or_default(),
            req.en.as_deref().unwrap_or_default(),
            req.tr.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|e| ApiError::db("DB insert error", e))?;

    Ok(Json(AckResponse::message("logged")))
}

/// Handler for GET /api/mistakes/:id
///
/// Lists the user's mistakes, most recent first.
pub async fn mistakes_list_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ItemsResponse<MistakeEntry>>> {
    let items = state
        .store
        .list_mistakes(user_id)
        .await
        .map_err(|e| ApiError::db("DB fetch error", e))?;

    Ok(Json(ItemsResponse::new(items)))
}
