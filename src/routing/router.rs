//! Tenant routing entry point.
//!
//! # Responsibilities
//! - Hold the domain and routing configuration for one config generation
//! - Classify a request: excluded, or label plus action
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Deterministic: same request always yields the same decision
//! - Config reload builds a new router rather than mutating this one

use serde::Serialize;

use crate::config::{DomainConfig, RouterConfig, RoutingConfig};
use crate::routing::interceptor::{intercept, RoutingAction};
use crate::routing::matcher::{AnyMatcher, PathMatcher};
use crate::routing::root_domain::{resolve_root_domain, RootDomain};
use crate::routing::subdomain::extract_with_root;
use crate::routing::target::RequestTarget;

/// Full outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub hostname: String,
    pub root: RootDomain,
    pub label: Option<String>,
    pub action: RoutingAction,
}

/// Immutable tenant router built from configuration.
#[derive(Debug)]
pub struct TenantRouter {
    domains: DomainConfig,
    routing: RoutingConfig,
    exclusions: AnyMatcher,
}

impl TenantRouter {
    pub fn new(domains: DomainConfig, routing: RoutingConfig) -> Self {
        let exclusions = AnyMatcher::exclusions(&routing);
        Self {
            domains,
            routing,
            exclusions,
        }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.domains.clone(), config.routing.clone())
    }

    /// True when the path bypasses tenant routing.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusions.matches(path)
    }

    /// Classify a request that is not excluded.
    pub fn route(&self, target: &RequestTarget) -> Decision {
        let hostname = target.hostname();
        let root = resolve_root_domain(&self.domains, hostname);
        let label = extract_with_root(&self.domains, target, &root);
        let action = intercept(&self.routing, label.as_deref(), &target.path);

        Decision {
            hostname: hostname.to_string(),
            root,
            label,
            action,
        }
    }
}

impl Default for TenantRouter {
    fn default() -> Self {
        Self::new(DomainConfig::default(), RoutingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::root_domain::DomainShape;

    fn route(host: &str, path: &str) -> Decision {
        TenantRouter::default().route(&RequestTarget::from_host_and_path(host, path))
    }

    #[test]
    fn test_custom_tenant_landing() {
        let decision = route("acme.coffeenchat.me", "/");
        assert_eq!(decision.label.as_deref(), Some("acme"));
        assert_eq!(decision.action, RoutingAction::RewriteTo("/s/acme".into()));
    }

    #[test]
    fn test_root_domain_admin_continues() {
        let decision = route("coffeenchat.me", "/admin");
        assert_eq!(decision.label, None);
        assert_eq!(decision.action, RoutingAction::Continue);
    }

    #[test]
    fn test_tenant_admin_redirects() {
        let decision = route("acme.coffeenchat.me", "/admin");
        assert_eq!(decision.action, RoutingAction::RedirectTo("/".into()));
    }

    #[test]
    fn test_preview_tenant_landing() {
        let decision = route("tenant---feature-x.vercel.app", "/");
        assert_eq!(decision.label.as_deref(), Some("tenant"));
        assert_eq!(decision.root.domain, "feature-x.vercel.app");
        assert_eq!(decision.root.shape, DomainShape::Preview);
        assert_eq!(decision.action, RoutingAction::RewriteTo("/s/tenant".into()));
    }

    #[test]
    fn test_www_continues_on_any_path() {
        for path in ["/", "/admin", "/pricing"] {
            let decision = route("www.coffeenchat.me", path);
            assert_eq!(decision.label, None);
            assert_eq!(decision.action, RoutingAction::Continue);
        }
    }

    #[test]
    fn test_local_tenant() {
        let target = RequestTarget::new("http://label.localhost:3000/", "label.localhost:3000", "/");
        let decision = TenantRouter::default().route(&target);
        assert_eq!(decision.hostname, "label.localhost");
        assert_eq!(decision.label.as_deref(), Some("label"));
        assert_eq!(decision.action, RoutingAction::RewriteTo("/s/label".into()));
    }

    #[test]
    fn test_exclusions_follow_config() {
        let router = TenantRouter::default();
        assert!(router.is_excluded("/api/tenants"));
        assert!(router.is_excluded("/favicon.ico"));
        assert!(!router.is_excluded("/"));
    }
}
