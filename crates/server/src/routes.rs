use std::time::Duration;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod employees;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: employee CRUD plus health, metrics and docs.
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Reads and deletes take an id-or-name token; PUT and PATCH expect an id
    // in the same position.
    let api = Router::new()
        .route("/employee", post(employees::create_employee))
        .route("/employees", get(employees::list_employees))
        .route(
            "/employee/:token",
            get(employees::get_employee)
                .put(employees::replace_employee)
                .patch(employees::patch_employee)
                .delete(employees::delete_employee),
        );

    ops.merge(api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOB: &str = r#"{"name":"Bob","age":30}"#;

    fn app() -> Router {
        build_router(
            ServerState::in_memory(),
            CorsLayer::very_permissive(),
            Duration::from_secs(5),
        )
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body)
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn call(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        send(app, method, uri, body).await
    }

    #[tokio::test]
    async fn create_accepts_json_without_json_content_type() {
        let app = app();
        let (status, body) = call(&app, "POST", "/employee", Some(BOB)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"created": "Employee with id 1 created successfully"}));
    }

    #[tokio::test]
    async fn undecodable_payload_is_bad_request() {
        let app = app();
        let (status, body) = call(&app, "POST", "/employee", Some("name=Bob")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Failed to decode request payload"}));

        let (status, _) = call(&app, "POST", "/employee", Some(r#"{"age":"old"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (_, list) = call(&app, "GET", "/employees", None).await;
        assert_eq!(list, json!({"employees": []}));
    }

    #[tokio::test]
    async fn oversized_body_keeps_payload_too_large_status() {
        let app = app();
        let huge = Body::from(" ".repeat(3 * 1024 * 1024));
        let (status, body) = send(&app, "POST", "/employee", huge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].is_string());
        let (_, list) = call(&app, "GET", "/employees", None).await;
        assert_eq!(list, json!({"employees": []}));
    }

    #[tokio::test]
    async fn update_with_bad_id_is_bad_request() {
        let app = app();
        for method in ["PUT", "PATCH"] {
            let (status, body) = call(&app, method, "/employee/bob", Some(BOB)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
            assert_eq!(body, json!({"error": "Failed to decode employee id"}), "{method}");
        }
    }

    #[tokio::test]
    async fn replace_missing_id_only_reports_not_found() {
        let app = app();
        let (status, body) = call(&app, "PUT", "/employee/3", Some(BOB)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "No record exists for id 3"}));
    }

    #[tokio::test]
    async fn patch_missing_id_is_not_found() {
        let app = app();
        call(&app, "POST", "/employee", Some(BOB)).await;
        let (status, body) = call(&app, "PATCH", "/employee/4", Some(r#"{"age":31}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "No record exists for id 4"}));

        let (_, body) = call(&app, "GET", "/employee/1", None).await;
        assert_eq!(body["employee"]["age"], 30);
    }

    #[tokio::test]
    async fn patch_with_undecodable_body_leaves_record_untouched() {
        let app = app();
        call(&app, "POST", "/employee", Some(BOB)).await;
        let (status, body) = call(&app, "PATCH", "/employee/1", Some(r#"{"age":"old"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Failed to decode request payload"}));

        let (_, body) = call(&app, "GET", "/employee/1", None).await;
        assert_eq!(body, json!({"employee": {"id": 1, "name": "Bob", "age": 30}}));
    }

    #[tokio::test]
    async fn delete_missing_numeric_id_is_not_found() {
        let app = app();
        call(&app, "POST", "/employee", Some(BOB)).await;
        let (status, body) = call(&app, "DELETE", "/employee/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "No record exists for id 2"}));

        let (_, list) = call(&app, "GET", "/employees", None).await;
        assert_eq!(list["employees"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn health_and_docs_are_served() {
        let app = app();
        let (status, body) = call(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, doc) = call(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/employee/{token}"].is_object());
    }
}
