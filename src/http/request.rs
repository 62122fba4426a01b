//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract routing-relevant information (url, host, path)
//! - Rewrite the request path for tenant pages
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The full URL is rebuilt from the Host header since servers only see
//!   the origin-form target

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, Uri};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::routing::RequestTarget;

/// Header carrying the request identifier.
pub const X_REQUEST_ID: &str = "x-request-id";

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Produces a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID header, if present.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Build the routing view of a request.
///
/// The host comes from the `Host` header, falling back to the URI authority
/// (HTTP/2), and is empty when neither is present.
pub fn request_target(request: &Request<Body>) -> RequestTarget {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
        .unwrap_or_default();

    let scheme = request
        .headers()
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .or_else(|| request.uri().scheme_str())
        .unwrap_or("http");

    let uri = request.uri();
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());

    RequestTarget::new(
        format!("{scheme}://{host}{path_and_query}"),
        host,
        uri.path(),
    )
}

/// Replace the request target with `path`. The query string is dropped.
pub fn rewrite_path(request: &mut Request<Body>, path: &str) -> Result<(), axum::http::Error> {
    let uri = Uri::builder().path_and_query(path).build()?;
    *request.uri_mut() = uri;
    Ok(())
}
