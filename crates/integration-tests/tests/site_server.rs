//! Integration tests for the static host.
//!
//! The router is driven in-process with `oneshot`, against the fixture
//! site shipped with the server crate.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use mb_studio_core::config::SiteConfig;
use mb_studio_integration_tests::fixture_server_config;
use mb_studio_server::middleware::security_headers::CONTENT_SECURITY_POLICY_VALUE;
use tower::ServiceExt;

async fn fetch(path: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = mb_studio_server::app(&fixture_server_config())
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body fits");
    (status, headers, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_page_embeds_a_valid_site_config() {
    let (status, _, html) = fetch("/index.html").await;
    assert_eq!(status, StatusCode::OK);

    // The page's config block is what the widgets read on start-up.
    let start = html
        .find(r#"id="site-config">"#)
        .map(|i| i + r#"id="site-config">"#.len())
        .expect("config block present");
    let end = html
        .get(start..)
        .and_then(|rest| rest.find("</script>"))
        .map(|len| start + len)
        .expect("config block closed");
    let config = SiteConfig::from_json(html.get(start..end).expect("in bounds"))
        .expect("fixture config is valid");
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.testimonial_interval_ms, 5000);
}

#[tokio::test]
async fn test_wasm_bundle_served_under_pkg() {
    let (status, headers, body) = fetch("/pkg/mb_studio_web.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("export default"));
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.contains("javascript"), "{content_type}");
}

#[tokio::test]
async fn test_csp_allows_wasm_but_not_eval() {
    let (_, headers, _) = fetch("/").await;
    let csp = headers
        .get(header::CONTENT_SECURITY_POLICY)
        .and_then(|v| v.to_str().ok())
        .expect("CSP header");
    assert_eq!(csp, CONTENT_SECURITY_POLICY_VALUE);
    assert!(csp.contains("'wasm-unsafe-eval'"));
    assert!(!csp.contains("'unsafe-eval'"));
    assert!(!csp.contains("'unsafe-inline'"));
}

#[tokio::test]
async fn test_unknown_paths_are_not_found() {
    for path in ["/missing.html", "/pkg/missing.wasm"] {
        let (status, headers, _) = fetch(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(headers.contains_key(header::X_FRAME_OPTIONS), "{path}");
    }
}
