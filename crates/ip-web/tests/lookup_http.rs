//! Drive the lookup against a local axum stand-in for ipinfo.io.

#![cfg(feature = "server")]

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use http::StatusCode;
use ip_web::api::fetch_lookup;
use ip_web::cli::run_lookup;
use ip_web::i18n::Locale;
use ip_web::lookup::{Location, LookupError, ViewState};

async fn spawn_mock() -> SocketAddr {
    let app = Router::new()
        .route(
            "/json",
            get(|| async {
                axum::Json(serde_json::json!({
                    "ip": "8.8.8.8",
                    "hostname": "dns.google",
                    "city": "Mountain View",
                    "region": "California",
                    "country": "US",
                    "org": "AS15169 Google LLC"
                }))
            }),
        )
        .route(
            "/bogon",
            get(|| async { axum::Json(serde_json::json!({ "ip": "10.0.0.1", "bogon": true })) }),
        )
        .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/limited", get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }))
        .route("/garbage", get(|| async { "<html>not json</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn success_yields_ip_and_location() {
    let addr = spawn_mock().await;

    let result = fetch_lookup(&format!("http://{}/json", addr)).await.unwrap();
    assert_eq!(result.ip, "8.8.8.8");
    assert_eq!(
        result.location,
        Some(Location {
            country: "US".into(),
            city: "Mountain View".into(),
        })
    );
    assert_eq!(result.location.unwrap().to_string(), "Mountain View, US");
}

#[tokio::test]
async fn success_without_location() {
    let addr = spawn_mock().await;

    let state = run_lookup(&format!("http://{}/bogon", addr), Locale::En).await;
    assert_eq!(state.ip(), Some("10.0.0.1"));
    assert_eq!(state.location(), None);
}

#[tokio::test]
async fn server_error_maps_to_http_failure() {
    let addr = spawn_mock().await;

    let err = fetch_lookup(&format!("http://{}/broken", addr)).await.unwrap_err();
    assert_eq!(err, LookupError::Http { status: 500 });

    let err = fetch_lookup(&format!("http://{}/limited", addr)).await.unwrap_err();
    assert_eq!(err, LookupError::Http { status: 429 });
}

#[tokio::test]
async fn server_error_shows_localized_message_and_no_ip() {
    let addr = spawn_mock().await;

    let state = run_lookup(&format!("http://{}/broken", addr), Locale::Ko).await;
    assert_eq!(state.error(), Some("IP 및 지역 정보를 가져오는 데 실패했습니다."));
    assert_eq!(state.ip(), None);
    assert_eq!(state.location(), None);
}

#[tokio::test]
async fn malformed_body_is_unexpected() {
    let addr = spawn_mock().await;

    let err = fetch_lookup(&format!("http://{}/garbage", addr)).await.unwrap_err();
    assert!(matches!(err, LookupError::Unexpected { detail: Some(_) }), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_endpoint_is_unexpected() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = run_lookup(&format!("http://{}/json", addr), Locale::En).await;
    match state {
        ViewState::Error(message) => assert!(!message.is_empty()),
        other => panic!("expected error state, got {:?}", other),
    }
}
