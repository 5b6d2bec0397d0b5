//! Request-pipeline adapter tests (requires the `http` feature).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::post;
use axum::{Router, middleware};
use serde_json::{Value, json};
use shapecheck::http::guard_body;
use shapecheck::prelude::*;
use tower::ServiceExt;

fn app() -> Router {
    let rule: Arc<dyn Validate> = Arc::new(object([
        ("name", string().boxed()),
        ("age", optional(number()).boxed()),
    ]));
    Router::new()
        .route("/users", post(|| async { "created" }))
        .layer(middleware::from_fn(move |request, next| {
            guard_body(rule.clone(), request, next)
        }))
}

fn post_json(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_body_passes_through() {
    let response = app()
        .oneshot(post_json(r#"{"name": "a", "age": 3}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_body_is_rejected_with_the_error_list() {
    let response = app()
        .oneshot(post_json(r#"{"name": 1, "extra": true}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let errors = body_json(response).await;
    assert_eq!(
        errors,
        json!([
            {
                "location": "body.name",
                "message": "Expected value to be of type: string",
                "expected": "string",
                "value": 1
            },
            {
                "location": "body.extra",
                "message": "Object has unknown property which is defined",
                "expected": "undefined",
                "value": true
            }
        ])
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_at_the_body_root() {
    let response = app().oneshot(post_json("not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let errors = body_json(response).await;
    assert_eq!(errors[0]["location"], "body");
    assert_eq!(errors[0]["message"], "Request body is not valid JSON");
}
