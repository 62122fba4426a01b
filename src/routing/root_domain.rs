//! Root domain resolution.
//!
//! # Responsibilities
//! - Map a hostname to the tenant-less base domain of the deployment
//!
//! # Design Decisions
//! - Ordered rule chain, first match wins
//! - Case-sensitive, no normalization
//! - Total: unknown shapes resolve to the hostname itself

use serde::Serialize;

use crate::config::DomainConfig;
use crate::routing::target::{is_local, strip_port};

/// Which hostname shape produced the root domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainShape {
    Local,
    Preview,
    Platform,
    Custom,
    Fallback,
    Unknown,
}

/// A resolved root domain and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootDomain {
    pub shape: DomainShape,
    pub domain: String,
}

impl RootDomain {
    fn new(shape: DomainShape, domain: impl Into<String>) -> Self {
        Self {
            shape,
            domain: domain.into(),
        }
    }
}

type Rule = fn(&DomainConfig, &str) -> Option<RootDomain>;

const RULES: &[Rule] = &[local, preview, platform, custom, fallback];

/// Resolve the root domain for `hostname`.
///
/// A trailing `:port` is stripped first so callers may pass a raw host.
pub fn resolve_root_domain(domains: &DomainConfig, hostname: &str) -> RootDomain {
    let hostname = strip_port(hostname);
    RULES
        .iter()
        .find_map(|rule| rule(domains, hostname))
        .unwrap_or_else(|| RootDomain::new(DomainShape::Unknown, hostname))
}

pub(crate) fn is_preview(domains: &DomainConfig, hostname: &str) -> bool {
    hostname.contains(&domains.preview_separator) && hostname.ends_with(&domains.platform_suffix)
}

fn local(domains: &DomainConfig, hostname: &str) -> Option<RootDomain> {
    is_local(hostname).then(|| RootDomain::new(DomainShape::Local, domains.local_root.as_str()))
}

fn preview(domains: &DomainConfig, hostname: &str) -> Option<RootDomain> {
    if !is_preview(domains, hostname) {
        return None;
    }
    let branch = hostname
        .rsplit_once(domains.preview_separator.as_str())
        .map_or(hostname, |(_, branch)| branch);
    Some(RootDomain::new(DomainShape::Preview, branch))
}

// Every platform production hostname is its own root.
fn platform(domains: &DomainConfig, hostname: &str) -> Option<RootDomain> {
    (hostname.ends_with(&domains.platform_suffix)
        && !hostname.contains(&domains.preview_separator))
        .then(|| RootDomain::new(DomainShape::Platform, hostname))
}

fn custom(domains: &DomainConfig, hostname: &str) -> Option<RootDomain> {
    hostname
        .ends_with(&domains.custom_suffix())
        .then(|| RootDomain::new(DomainShape::Custom, domains.custom_domain.as_str()))
}

fn fallback(domains: &DomainConfig, _hostname: &str) -> Option<RootDomain> {
    domains
        .fallback_root_domain
        .as_deref()
        .filter(|root| !root.is_empty())
        .map(|root| RootDomain::new(DomainShape::Fallback, strip_port(root)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(hostname: &str) -> RootDomain {
        resolve_root_domain(&DomainConfig::default(), hostname)
    }

    #[test]
    fn test_local_hosts() {
        assert_eq!(resolve("localhost").domain, "localhost:3000");
        assert_eq!(resolve("acme.localhost").shape, DomainShape::Local);
        assert_eq!(resolve("127.0.0.1").domain, "localhost:3000");
    }

    #[test]
    fn test_preview_branch_is_root() {
        let root = resolve("tenant---feature-x.vercel.app");
        assert_eq!(root, RootDomain::new(DomainShape::Preview, "feature-x.vercel.app"));

        // Last segment wins when the separator repeats.
        assert_eq!(resolve("a---b---c.vercel.app").domain, "c.vercel.app");
    }

    #[test]
    fn test_platform_host_is_own_root() {
        let root = resolve("subdomaintesttrial.vercel.app");
        assert_eq!(root, RootDomain::new(DomainShape::Platform, "subdomaintesttrial.vercel.app"));
    }

    #[test]
    fn test_custom_domain() {
        assert_eq!(resolve("acme.coffeenchat.me").domain, "coffeenchat.me");
        assert_eq!(resolve("www.coffeenchat.me").domain, "coffeenchat.me");
        // The bare domain lacks the leading-dot suffix and falls through.
        assert_eq!(resolve("coffeenchat.me").shape, DomainShape::Unknown);
    }

    #[test]
    fn test_fallback_strips_port() {
        let domains = DomainConfig {
            fallback_root_domain: Some("example.org:8080".into()),
            ..DomainConfig::default()
        };
        let root = resolve_root_domain(&domains, "shop.example.org");
        assert_eq!(root, RootDomain::new(DomainShape::Fallback, "example.org"));
    }

    #[test]
    fn test_empty_fallback_is_ignored() {
        let domains = DomainConfig {
            fallback_root_domain: Some(String::new()),
            ..DomainConfig::default()
        };
        assert_eq!(resolve_root_domain(&domains, "shop.example.org").shape, DomainShape::Unknown);
    }

    #[test]
    fn test_unknown_host_is_unchanged() {
        assert_eq!(resolve("shop.example.org:443").domain, "shop.example.org");
    }

    #[test]
    fn test_rule_order_local_before_custom() {
        assert_eq!(resolve("localhost.coffeenchat.me").shape, DomainShape::Local);
    }
}
