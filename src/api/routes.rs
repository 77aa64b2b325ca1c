//! API Routes
//!
//! Configures the Axum router with all backend endpoints.

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    liveness_handler, login_handler, mistake_add_handler, mistakes_list_handler,
    notebook_add_handler, notebook_delete_handler, notebook_list_handler, signup_handler,
    update_handler, update_progress_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: any origin, methods GET/POST/PUT/PATCH/DELETE, Content-Type header
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(liveness_handler))
        .route("/api/signup", post(signup_handler))
        .route("/api/login", post(login_handler))
        .route("/api/update-progress", post(update_progress_handler))
        .route("/api/update", post(update_handler))
        .route("/api/notebook/add", post(notebook_add_handler))
        .route("/api/notebook/:id", get(notebook_list_handler))
        .route("/api/notebook/delete/:note_id", delete(notebook_delete_handler))
        .route("/api/mistake", post(mistake_add_handler))
        .route("/api/mistakes/:id", get(mistakes_list_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        create_router(state)
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Language Buddy Backend is Running");
    }

    #[tokio::test]
    async fn test_validation_failure_still_200() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/signup")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"ayse"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_notebook_list_empty() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/notebook/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
