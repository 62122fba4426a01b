//! Response construction.
//!
//! # Responsibilities
//! - Build redirect responses for blocked tenant paths
//! - Convert upstream responses for the client
//! - Map upstream failures to appropriate HTTP status codes
//!
//! # Design Decisions
//! - Redirects are 307 so the method is preserved
//! - Streaming responses avoid buffering entire body

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use hyper::body::Incoming;
use url::Url;

/// Resolve `path` against the request URL, the way a browser would.
pub fn redirect_location(request_url: &str, path: &str) -> Option<String> {
    Url::parse(request_url)
        .and_then(|base| base.join(path))
        .map(String::from)
        .ok()
}

/// `307 Temporary Redirect` to `path` on the request's origin.
///
/// Falls back to the bare path when the request URL cannot be parsed.
pub fn redirect(request_url: &str, path: &str) -> Response {
    let location = redirect_location(request_url, path).unwrap_or_else(|| path.to_string());
    match HeaderValue::from_str(&location) {
        Ok(value) => (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, value)]).into_response(),
        Err(_) => internal_error("Invalid redirect location"),
    }
}

/// Pass an upstream response through to the client.
pub fn from_upstream(response: axum::http::Response<Incoming>) -> Response {
    let (parts, body) = response.into_parts();
    Response::from_parts(parts, Body::new(body))
}

pub fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}

pub fn internal_error(message: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_location_keeps_origin() {
        assert_eq!(
            redirect_location("http://acme.coffeenchat.me/admin?tab=users", "/").as_deref(),
            Some("http://acme.coffeenchat.me/")
        );
        assert_eq!(
            redirect_location("http://acme.localhost:3000/admin", "/").as_deref(),
            Some("http://acme.localhost:3000/")
        );
    }

    #[test]
    fn test_redirect_response() {
        let response = redirect("https://acme.coffeenchat.me/admin", "/");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://acme.coffeenchat.me/"
        );
    }

    #[test]
    fn test_redirect_with_unparseable_url_uses_path() {
        let response = redirect("not a url", "/");
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }
}
