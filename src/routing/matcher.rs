//! Path exclusion matching.
//!
//! # Responsibilities
//! - Decide which request paths bypass tenant routing entirely
//! - Leading-segment prefixes (API routes, framework internals)
//! - Static assets (last segment contains a dot)
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Prefixes match the raw text after the leading `/`, so `api` also
//!   covers `/apiary`
//! - No regex to guarantee O(n) matching

use crate::config::RoutingConfig;

/// Trait for matching request paths against exclusion conditions.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches paths whose text after the leading `/` starts with a prefix.
#[derive(Debug, Clone)]
pub struct LeadingPrefixMatcher {
    prefix: String,
}

impl LeadingPrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl PathMatcher for LeadingPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.strip_prefix('/')
            .unwrap_or(path)
            .starts_with(&self.prefix)
    }
}

/// Matches paths whose final segment contains a `.`.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetMatcher;

impl PathMatcher for StaticAssetMatcher {
    fn matches(&self, path: &str) -> bool {
        path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn PathMatcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn PathMatcher>>) -> Self {
        Self { matchers }
    }

    /// Build the exclusion set described by the routing configuration.
    pub fn exclusions(routing: &RoutingConfig) -> Self {
        let mut matchers: Vec<Box<dyn PathMatcher>> = routing
            .excluded_prefixes
            .iter()
            .map(|prefix| Box::new(LeadingPrefixMatcher::new(prefix.as_str())) as Box<dyn PathMatcher>)
            .collect();
        if routing.skip_static_assets {
            matchers.push(Box::new(StaticAssetMatcher));
        }
        Self::new(matchers)
    }
}

impl PathMatcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
