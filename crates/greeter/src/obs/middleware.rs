//! Per-request metrics recording.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Label for requests that matched no route. Raw paths must not become
/// labels: each distinct label set is a permanent series in the registry.
const UNMATCHED: &str = "<unmatched>";

/// Record request count and latency for every request passing through the
/// router. Runs after the matched handler so the recorded status is final.
pub async fn track_http(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());
    let start = Instant::now();

    let res = next.run(req).await;

    let status = res.status().as_u16().to_string();
    let m = state.metrics();
    m.http_requests.inc(&[
        ("method", method.as_str()),
        ("path", &path),
        ("status", &status),
    ]);
    m.http_request_duration
        .observe(&[("method", method.as_str()), ("path", &path)], start.elapsed());

    res
}
