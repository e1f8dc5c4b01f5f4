//! The static site router, exercised in-process.

#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use http::{Request, StatusCode};
use ip_web::server::router;
use tempfile::TempDir;
use tower::ServiceExt;

fn temp_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<!DOCTYPE html><html><body></body></html>").unwrap();
    std::fs::write(dir.path().join("ip-web.js"), "console.log('hi');").unwrap();
    dir
}

async fn get(site: &std::path::Path, uri: &str) -> (StatusCode, String) {
    let response = router(site)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz() {
    let site = temp_site();
    let (status, body) = get(site.path(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn serves_index_and_assets() {
    let site = temp_site();

    let (status, body) = get(site.path(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));

    let (status, body) = get(site.path(), "/ip-web.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("console.log"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let site = temp_site();
    let (status, body) = get(site.path(), "/some/client/route").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));
}
