//! Per-request routing decision.

use serde::Serialize;

use crate::config::RoutingConfig;

/// What the HTTP layer should do with a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum RoutingAction {
    /// Dispatch normally.
    Continue,
    /// Serve this internal path while the client keeps its URL.
    RewriteTo(String),
    /// Send the client to this path on the same origin.
    RedirectTo(String),
}

impl RoutingAction {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RoutingAction::Continue => "continue",
            RoutingAction::RewriteTo(_) => "rewrite",
            RoutingAction::RedirectTo(_) => "redirect",
        }
    }
}

/// Decide the action for `path` given the tenant `label`, if any.
///
/// Root-domain requests always continue. On a tenant subdomain the admin
/// surface redirects to the redirect path and the landing page is served
/// from the tenant namespace.
pub fn intercept(routing: &RoutingConfig, label: Option<&str>, path: &str) -> RoutingAction {
    let Some(label) = label else {
        return RoutingAction::Continue;
    };

    if path.starts_with(&routing.admin_prefix) {
        RoutingAction::RedirectTo(routing.redirect_path.clone())
    } else if path == "/" {
        RoutingAction::RewriteTo(tenant_path(routing, label))
    } else {
        RoutingAction::Continue
    }
}

// The label comes from the Host header and is encoded as one path segment.
fn tenant_path(routing: &RoutingConfig, label: &str) -> String {
    format!(
        "{}/{}",
        routing.tenant_path_prefix.trim_end_matches('/'),
        urlencoding::encode(label)
    )
}
