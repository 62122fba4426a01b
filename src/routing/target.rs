//! The routing-relevant view of an incoming request.

use serde::Serialize;

/// Immutable request facts consumed by the routing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestTarget {
    /// Full request URL (`scheme://host/path?query`).
    pub url: String,
    /// Raw `Host` header value, possibly with a port.
    pub host: String,
    /// URL path, always starting with `/`.
    pub path: String,
}

impl RequestTarget {
    pub fn new(url: impl Into<String>, host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            host: host.into(),
            path: path.into(),
        }
    }

    /// Build a target from a host and path, deriving an `http://` URL.
    pub fn from_host_and_path(host: &str, path: &str) -> Self {
        Self::new(format!("http://{host}{path}"), host, path)
    }

    /// Host header with any port suffix removed.
    pub fn hostname(&self) -> &str {
        strip_port(&self.host)
    }
}

/// Drop everything from the first `:` on.
pub fn strip_port(host: &str) -> &str {
    match host.split_once(':') {
        Some((name, _)) => name,
        None => host,
    }
}

/// Local development hosts are recognised by substring, wherever they appear.
pub(crate) fn is_local(value: &str) -> bool {
    value.contains("localhost") || value.contains("127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_port() {
        assert_eq!(strip_port("acme.example.com:443"), "acme.example.com");
        assert_eq!(strip_port("acme.example.com"), "acme.example.com");
        assert_eq!(strip_port(""), "");
        assert_eq!(strip_port(":8080"), "");
    }

    #[test]
    fn test_hostname_from_target() {
        let target = RequestTarget::from_host_and_path("acme.localhost:3000", "/");
        assert_eq!(target.url, "http://acme.localhost:3000/");
        assert_eq!(target.hostname(), "acme.localhost");
    }
}
