//! HTTP middleware for the static host.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Security headers (CSP, framing, sniffing)

pub mod security_headers;

pub use security_headers::security_headers_middleware;
