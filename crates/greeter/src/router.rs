//! Axum router wiring.
//!
//! Exposes the greeting route plus the operational endpoints. A single
//! middleware layer records request count and latency for every route;
//! the handlers themselves stay pure.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::hello::hello))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_http,
        ))
        .with_state(state)
}
