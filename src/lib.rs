//! Language Buddy Backend
//!
//! Backend service for a language-learning app: signup/login, learning
//! progress (xp, hearts, streak, unit/lesson), a per-user vocabulary
//! notebook and a per-user mistake log, all over a uniform
//! `{success, ...}` JSON envelope backed by MySQL.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
