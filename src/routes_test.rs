use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn options() -> LeptosOptions {
    LeptosOptions::builder().output_name("schooladmin").site_root("target/site").site_pkg_dir("pkg").build()
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = app(options())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let response = app(options())
        .oneshot(Request::builder().uri("/pkg/missing.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
