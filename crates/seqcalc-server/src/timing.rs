//! Response-time middleware.
//!
//! Starts a [`Stopwatch`] before the request reaches the router and, for JSON
//! responses, appends the elapsed time as `responseTime` to the top-level
//! object. Other responses pass through untouched.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::info;

use seqcalc_core::Stopwatch;

use crate::error::ApiError;

/// Name of the field added to JSON bodies.
pub const RESPONSE_TIME_FIELD: &str = "responseTime";

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Insert `responseTime` into a JSON object body. Non-object bodies are
/// returned unchanged.
pub fn with_response_time(bytes: &[u8], seconds: &str) -> Option<Vec<u8>> {
    let Ok(Value::Object(mut map)) = serde_json::from_slice::<Value>(bytes) else {
        return None;
    };
    map.insert(RESPONSE_TIME_FIELD.to_string(), Value::String(seconds.to_owned()));
    serde_json::to_vec(&Value::Object(map)).ok()
}

/// Axum middleware attaching the whole-request duration to JSON responses.
pub async fn response_time(request: Request, next: Next) -> Response {
    let stopwatch = Stopwatch::start();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    let status = response.status();

    let response = if is_json(response.headers()) {
        let (mut parts, body) = response.into_parts();
        match to_bytes(body, usize::MAX).await {
            Ok(bytes) => match with_response_time(&bytes, &stopwatch.seconds()) {
                Some(rewritten) => {
                    parts.headers.remove(header::CONTENT_LENGTH);
                    Response::from_parts(parts, Body::from(rewritten))
                }
                None => Response::from_parts(parts, Body::from(bytes)),
            },
            Err(e) => ApiError::Internal(format!("buffering response body: {e}")).into_response(),
        }
    } else {
        response
    };

    info!(
        %method,
        path = %path,
        status = status.as_u16(),
        elapsed = %stopwatch.seconds(),
        "request handled"
    );
    response
}
