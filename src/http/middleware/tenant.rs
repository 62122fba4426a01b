//! Tenant routing middleware.
//! Applies the routing decision before requests reach the upstream handler.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::request::{request_id, request_target, rewrite_path};
use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::RoutingAction;

/// Tenant label attached to rewritten requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantLabel(pub String);

pub async fn tenant_routing(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let live = state.live.load_full();

    // 1. Excluded paths (API, internals, static assets) skip routing.
    if live.router.is_excluded(req.uri().path()) {
        metrics::record_decision("excluded");
        return next.run(req).await;
    }

    // 2. Classify.
    let target = request_target(&req);
    let decision = live.router.route(&target);
    metrics::record_decision(decision.action.kind());

    tracing::debug!(
        request_id = %request_id(&req),
        host = %target.host,
        path = %target.path,
        root = %decision.root.domain,
        label = ?decision.label,
        action = decision.action.kind(),
        "Routing decision"
    );

    // 3. Apply.
    match decision.action {
        RoutingAction::Continue => next.run(req).await,
        RoutingAction::RewriteTo(path) => {
            if let Err(e) = rewrite_path(&mut req, &path) {
                tracing::error!(request_id = %request_id(&req), path = %path, error = %e, "Invalid rewrite path");
                return response::internal_error("Invalid rewrite path");
            }
            if let Some(label) = decision.label {
                req.extensions_mut().insert(TenantLabel(label));
            }
            next.run(req).await
        }
        RoutingAction::RedirectTo(path) => {
            tracing::info!(
                request_id = %request_id(&req),
                host = %target.host,
                from = %target.path,
                to = %path,
                "Redirecting tenant request"
            );
            response::redirect(&target.url, &path)
        }
    }
}
