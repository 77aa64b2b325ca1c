//! Response DTOs for the backend API
//!
//! Every response body carries a boolean `success` field; extra fields are
//! merged alongside it. Failures use [`ErrorResponse`] with a single
//! human-readable message and nothing else.

use serde::Serialize;

use crate::models::User;

/// Bare acknowledgment, optionally with a short status message
/// (e.g. "saved", "updated", "deleted", "logged").
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AckResponse {
    /// Creates a plain `{"success": true}` acknowledgment.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Creates an acknowledgment with a status message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// Response body for a successful login, carrying the user row
/// (minus the password hash).
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

impl LoginResponse {
    /// Creates a new LoginResponse for the authenticated user.
    pub fn new(user: User) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

/// Response body for the listing operations (notebook, mistakes).
#[derive(Debug, Clone, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub success: bool,
    pub items: Vec<T>,
}

impl<T: Serialize> ItemsResponse<T> {
    /// Creates a new ItemsResponse from the fetched rows.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            success: true,
            items,
        }
    }
}

/// Error response body for all failure conditions.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_response_plain() {
        let json = serde_json::to_string(&AckResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_ack_response_with_message() {
        let json: serde_json::Value = serde_json::to_value(AckResponse::message("saved")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "saved");
    }

    #[test]
    fn test_error_response_serialize() {
        let json: serde_json::Value = serde_json::to_value(ErrorResponse::new("DB error")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "DB error");
    }

    #[test]
    fn test_items_response_serialize() {
        let resp = ItemsResponse::new(vec!["a", "b"]);
        let json: serde_json::Value = serde_json::to_value(resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }
}
