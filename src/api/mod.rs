//! API Module
//!
//! HTTP handlers and routing for the backend REST API.
//!
//! # Endpoints
//! - `GET /` - Liveness text
//! - `POST /api/signup` - Create an account
//! - `POST /api/login` - Authenticate
//! - `POST /api/update-progress` - Overwrite xp/hearts
//! - `POST /api/update` - Partial progress update
//! - `POST /api/notebook/add` - Save a notebook entry
//! - `GET /api/notebook/:id` - List a user's notebook
//! - `DELETE /api/notebook/delete/:note_id` - Delete a notebook entry
//! - `POST /api/mistake` - Log a mistake
//! - `GET /api/mistakes/:id` - List a user's mistakes

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
