#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt; // for `oneshot`

use greeter::{app_state::AppState, config::ServerConfig, router};

fn test_app() -> axum::Router {
    let cfg = ServerConfig::default();
    router::build_router(AppState::new(cfg))
}

async fn body_bytes(res: axum::response::Response) -> Vec<u8> {
    res.into_body().collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn get_root_returns_greeting() {
    let app = test_app();
    let res = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_bytes(res).await, b"Hello, World!");
}

#[tokio::test]
async fn get_root_is_idempotent() {
    let app = test_app();

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let res = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        bodies.push(body_bytes(res).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0], b"Hello, World!");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let res = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let v: serde_json::Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert_eq!(v, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn metrics_records_requests() {
    let app = test_app();

    // Hit the greeting once so the counter has a series to show.
    let res = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[axum::http::header::CONTENT_TYPE],
        "text/plain; version=0.0.4; charset=utf-8"
    );

    let body = String::from_utf8(body_bytes(res).await).unwrap();
    assert!(body.contains("# TYPE greeter_http_requests_total counter"));
    assert!(body.contains(r#"method="GET""#));
    assert!(body.contains(r#"path="/""#));
    assert!(body.contains(r#"status="200""#));
    assert!(body.contains("# TYPE greeter_http_request_duration_micros histogram"));
}

#[tokio::test]
async fn unmatched_paths_collapse_to_one_series() {
    let app = test_app();

    for i in 0..20 {
        let res = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/scan/{i}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    let res = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = String::from_utf8(body_bytes(res).await).unwrap();

    // 20 distinct 404 paths must not mint 20 series.
    let series: Vec<&str> = body
        .lines()
        .filter(|l| l.starts_with("greeter_http_requests_total{"))
        .collect();
    assert_eq!(series.len(), 1);
    assert!(series[0].contains(r#"path="<unmatched>""#));
    assert!(series[0].ends_with(" 20"));
}

#[tokio::test]
async fn unknown_path_falls_through_to_404() {
    let app = test_app();
    let res = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
