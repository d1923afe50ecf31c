use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn router() -> Router {
    // cargo-leptos normally exports the site options; tests set the one
    // without a default.
    unsafe { std::env::set_var("LEPTOS_OUTPUT_NAME", "gatehouse") };
    app().unwrap()
}

async fn status_of(path: &str) -> StatusCode {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    router().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn known_pages_render() {
    assert_eq!(status_of("/").await, StatusCode::OK);
    assert_eq!(status_of("/sign-in").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_renders_not_found_page_with_404() {
    assert_eq!(status_of("/no-such-page").await, StatusCode::NOT_FOUND);
}
