//! Request and Response models for the backend API
//!
//! This module defines the persisted entities and the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP request and response
//! bodies.

pub mod entities;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use entities::{MistakeEntry, NotebookEntry, User};
pub use requests::{
    LoginRequest, MistakeAddRequest, NotebookAddRequest, ProgressRequest, SignupRequest,
    UpdateRequest,
};
pub use responses::{AckResponse, ErrorResponse, ItemsResponse, LoginResponse};
