//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the tenant router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address, connection cap).
    pub listener: ListenerConfig,

    /// Upstream application server that renders pages.
    pub upstream: UpstreamConfig,

    /// Hostname shapes used to find the root domain and tenant label.
    pub domains: DomainConfig,

    /// Paths produced by routing decisions and excluded from them.
    pub routing: RoutingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum concurrent in-flight requests (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 10_000,
        }
    }
}

/// Upstream application server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream address (e.g., "127.0.0.1:3000").
    pub address: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Domain shapes recognised by the root domain resolver.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DomainConfig {
    /// Root returned for any local development hostname.
    pub local_root: String,

    /// Suffix shared by platform production and preview hostnames.
    pub platform_suffix: String,

    /// Delimiter between tenant and branch in preview hostnames.
    pub preview_separator: String,

    /// Bare custom domain tenants live under (e.g., "example.com").
    pub custom_domain: String,

    /// Root used when no known shape matches. Overridden by `ROOT_DOMAIN`.
    pub fallback_root_domain: Option<String>,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            local_root: "localhost:3000".to_string(),
            platform_suffix: ".vercel.app".to_string(),
            preview_separator: "---".to_string(),
            custom_domain: "coffeenchat.me".to_string(),
            fallback_root_domain: None,
        }
    }
}

impl DomainConfig {
    /// Custom domain with a leading dot, as matched against hostnames.
    pub fn custom_suffix(&self) -> String {
        format!(".{}", self.custom_domain)
    }
}

/// Paths used by the request interceptor.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutingConfig {
    /// Internal namespace tenant landing pages are served from.
    pub tenant_path_prefix: String,

    /// Administrative surface never exposed on tenant subdomains.
    pub admin_prefix: String,

    /// Target of the redirect issued for blocked tenant paths.
    pub redirect_path: String,

    /// Leading path segments that bypass tenant routing (no leading slash).
    pub excluded_prefixes: Vec<String>,

    /// Bypass tenant routing for paths whose last segment contains a dot.
    pub skip_static_assets: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            tenant_path_prefix: "/s".to_string(),
            admin_prefix: "/admin".to_string(),
            redirect_path: "/".to_string(),
            excluded_prefixes: vec!["api".to_string(), "_next".to_string()],
            skip_static_assets: true,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upstream connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
