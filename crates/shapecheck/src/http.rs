//! Axum request-pipeline adapter
//!
//! The one place the crate touches transport concerns. [`guard_body`] wraps a
//! route so its handler only ever sees request bodies that matched the rule:
//! the body is buffered, parsed as JSON, validated with root name `"body"`,
//! and either forwarded untouched or answered with `400 Bad Request` and the
//! error list as a JSON body.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::{Router, middleware, routing::post};
//! use shapecheck::http::guard_body;
//! use shapecheck::prelude::*;
//!
//! let rule: Arc<dyn Validate> = Arc::new(object([("name", string().boxed())]));
//! let app: Router = Router::new()
//!     .route("/users", post(create_user))
//!     .layer(middleware::from_fn(move |req, next| {
//!         guard_body(rule.clone(), req, next)
//!     }));
//! ```

use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::core::{Locator, Validate, ValidationError};
use crate::validate::validate_named;

/// Root segment used for request-body error locations.
pub const BODY_NAME: &str = "body";

/// Largest request body the adapter will buffer, in bytes.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Middleware function enforcing `rule` on the JSON request body.
///
/// Use with [`axum::middleware::from_fn`], cloning the shared rule into the
/// closure. Bodies that are too large, unreadable, or not JSON are rejected
/// with a single body-level error; bodies that parse but mismatch are
/// rejected with the full path-qualified error list.
pub async fn guard_body(rule: Arc<dyn Validate>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return reject(vec![body_error("Request body could not be read", &*rule)]),
    };

    let data: Value = match serde_json::from_slice(&bytes) {
        Ok(data) => data,
        Err(_) => return reject(vec![body_error("Request body is not valid JSON", &*rule)]),
    };

    match validate_named(&data, &*rule, BODY_NAME) {
        result if result.is_success() => {
            let request = Request::from_parts(parts, Body::from(bytes));
            next.run(request).await
        }
        result => reject(result.into_errors()),
    }
}

fn body_error(message: &str, rule: &dyn Validate) -> ValidationError {
    ValidationError::new(&Locator::root(BODY_NAME), message, rule.schema(), None)
}

fn reject(errors: Vec<ValidationError>) -> Response {
    (StatusCode::BAD_REQUEST, Json(errors)).into_response()
}
