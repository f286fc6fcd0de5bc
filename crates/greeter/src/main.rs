//! greeter service
//!
//! - `GET /`        : the greeting
//! - `GET /health`  : liveness
//! - `GET /metrics` : Prometheus text format

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use greeter::{app_state, config, router};

const CONFIG_PATH: &str = "greeter.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    config::apply_env_overrides(&mut cfg).expect("PORT override failed");

    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "greeter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
