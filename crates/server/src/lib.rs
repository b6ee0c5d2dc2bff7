//! MB Studio Fix static host library.
//!
//! Serves the site's HTML pages and assets from `SITE_ROOT` and the
//! `wasm-pack` bundle from `SITE_PKG_DIR` under `/pkg`. There is no
//! application API: every interaction happens in the browser.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::ServerConfig;

/// Build the router.
pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(ServeDir::new(&config.site_root))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::path::PathBuf;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;

    fn fixtures() -> ServerConfig {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            site_root: root.join("site"),
            pkg_dir: root.join("pkg"),
        }
    }

    async fn get_path(path: &str) -> axum::response::Response {
        app(&fixtures())
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get_path("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let response = get_path("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("id=\"site-config\""));
    }

    #[tokio::test]
    async fn test_pkg_served_from_bundle_dir() {
        let response = get_path("/pkg/mb_studio_web.js").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let response = get_path("/no-such-page.html").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_security_headers_on_every_response() {
        for path in ["/", "/health", "/no-such-page.html"] {
            let response = get_path(path).await;
            let headers = response.headers();
            assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
            assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
            let csp = headers[header::CONTENT_SECURITY_POLICY].to_str().unwrap();
            assert!(csp.contains("'wasm-unsafe-eval'"), "{path}: {csp}");
        }
    }
}
