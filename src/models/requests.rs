//! Request DTOs for the backend API
//!
//! Defines the structure of incoming HTTP request bodies. Fields the caller
//! may legitimately omit are `Option`s; each type carries its own presence
//! validation so that a missing field is reported inside the response
//! envelope rather than as a transport-level rejection.

use serde::Deserialize;

fn is_blank(field: &Option<String>) -> bool {
    match field {
        Some(value) => value.is_empty(),
        None => true,
    }
}

/// Request body for POST /api/signup
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Target learning language
    pub language: Option<String>,
}

impl SignupRequest {
    /// Returns an error message if any required field is absent or empty.
    pub fn validate(&self) -> Option<String> {
        if is_blank(&self.username) || is_blank(&self.password) || is_blank(&self.language) {
            return Some("Missing fields".to_string());
        }
        None
    }
}

/// Request body for POST /api/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns an error message if any required field is absent or empty.
    pub fn validate(&self) -> Option<String> {
        if is_blank(&self.username) || is_blank(&self.password) {
            return Some("username and password required".to_string());
        }
        None
    }
}

/// Request body for POST /api/update-progress
///
/// The simple progress update: both counters are overwritten
/// unconditionally for the named user. Fields are optional at the
/// boundary; this operation has no up-front presence check, so absent
/// fields follow the NULL-bind behavior in the handler instead of being
/// rejected by the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressRequest {
    pub username: Option<String>,
    pub xp: Option<i64>,
    pub hearts: Option<i64>,
}

/// Request body for POST /api/update
///
/// The partial progress update: every field except `id` is optional, and an
/// absent field keeps the stored value. Absent and explicitly-present must
/// stay distinguishable, hence the `Option`s bound straight into the
/// conditional overwrite.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub id: Option<i64>,
    pub xp: Option<i64>,
    pub hearts: Option<i64>,
    pub unit: Option<i64>,
    pub lesson: Option<i64>,
    pub streak: Option<i64>,
    pub language: Option<String>,
}

impl UpdateRequest {
    /// Returns an error message if the user id is absent or zero.
    /// Row ids start at 1; a zero id stands in for "not provided".
    pub fn validate(&self) -> Option<String> {
        if matches!(self.id, None | Some(0)) {
            return Some("id required".to_string());
        }
        None
    }
}

/// Request body for POST /api/notebook/add
#[derive(Debug, Clone, Deserialize)]
pub struct NotebookAddRequest {
    pub user_id: Option<i64>,
    /// Source-language text
    pub en: Option<String>,
    /// Target-language text
    pub tr: Option<String>,
}

impl NotebookAddRequest {
    /// Returns an error message if any required field is absent or empty.
    /// A zero user id counts as absent, like an empty string.
    pub fn validate(&self) -> Option<String> {
        if matches!(self.user_id, None | Some(0)) || is_blank(&self.en) || is_blank(&self.tr) {
            return Some("user_id, en, tr required".to_string());
        }
        None
    }
}

/// Request body for POST /api/mistake
#[derive(Debug, Clone, Deserialize)]
pub struct MistakeAddRequest {
    pub user_id: Option<i64>,
    pub en: Option<String>,
    pub tr: Option<String>,
}

impl MistakeAddRequest {
    /// Returns an error message if any required field is absent or empty.
    /// A zero user id counts as absent, like an empty string.
    pub fn validate(&self) -> Option<String> {
        if matches!(self.user_id, None | Some(0)) || is_blank(&self.en) || is_blank(&self.tr) {
            return Some("user_id, en, tr required".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_deserialize() {
        let json = r#"{"username": "ayse", "password": "secret", "language": "turkish"}"#;
        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.username.as_deref(), Some("ayse"));
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_signup_missing_field() {
        let json = r#"{"username": "ayse", "password": "secret"}"#;
        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("Missing fields"));
    }

    #[test]
    fn test_signup_empty_field_counts_as_missing() {
        let json = r#"{"username": "ayse", "password": "", "language": "turkish"}"#;
        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("Missing fields"));
    }

    #[test]
    fn test_login_missing_password() {
        let json = r#"{"username": "ayse"}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.validate().as_deref(),
            Some("username and password required")
        );
    }

    #[test]
    fn test_update_requires_id() {
        let json = r#"{"xp": 50}"#;
        let req: UpdateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("id required"));
    }

    #[test]
    fn test_update_zero_id_counts_as_missing() {
        let json = r#"{"id": 0, "xp": 50}"#;
        let req: UpdateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("id required"));
    }

    #[test]
    fn test_progress_request_absent_fields_stay_none() {
        let json = r#"{"username": "ayse"}"#;
        let req: ProgressRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.username.as_deref(), Some("ayse"));
        assert_eq!(req.xp, None);
        assert_eq!(req.hearts, None);
    }

    #[test]
    fn test_update_absent_fields_stay_none() {
        let json = r#"{"id": 1, "hearts": 3}"#;
        let req: UpdateRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_none());
        assert_eq!(req.hearts, Some(3));
        assert_eq!(req.xp, None);
        assert_eq!(req.language, None);
    }

    #[test]
    fn test_update_explicit_zero_is_present() {
        // 0 must overwrite; only absence keeps the stored value
        let json = r#"{"id": 1, "xp": 0}"#;
        let req: UpdateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.xp, Some(0));
    }

    #[test]
    fn test_notebook_add_validate() {
        let json = r#"{"user_id": 1, "en": "cat", "tr": "kedi"}"#;
        let req: NotebookAddRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_none());

        let json = r#"{"user_id": 1, "en": "cat"}"#;
        let req: NotebookAddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("user_id, en, tr required"));
    }

    #[test]
    fn test_zero_user_id_counts_as_missing() {
        let json = r#"{"user_id": 0, "en": "cat", "tr": "kedi"}"#;
        let req: NotebookAddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("user_id, en, tr required"));

        let req: MistakeAddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("user_id, en, tr required"));
    }
}
