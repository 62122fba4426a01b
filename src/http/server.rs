//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the upstream handler
//! - Wire up middleware (tracing, timeout, concurrency limit, request ID,
//!   tenant routing)
//! - Bind server to listener
//! - Forward requests to the upstream application server
//! - Swap in reloaded configuration atomically

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{uri::Scheme, HeaderValue, Request, Uri},
    middleware,
    response::Response,
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RouterConfig;
use crate::http::middleware::{tenant_routing, TenantLabel};
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::http::response;
use crate::observability::metrics;
use crate::routing::TenantRouter;

/// Header telling the upstream which tenant a rewritten request belongs to.
pub const X_TENANT_LABEL: &str = "x-tenant-label";

/// One configuration generation and the router compiled from it.
#[derive(Debug)]
pub struct LiveConfig {
    pub config: RouterConfig,
    pub router: TenantRouter,
}

impl From<RouterConfig> for LiveConfig {
    fn from(config: RouterConfig) -> Self {
        let router = TenantRouter::from_config(&config);
        Self { config, router }
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub live: Arc<ArcSwap<LiveConfig>>,
    pub client: Client<HttpConnector, Body>,
}

/// HTTP front server for tenant routing.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(config.timeouts.connect_secs)));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        let router_config = config.clone();
        let state = AppState {
            live: Arc::new(ArcSwap::from_pointee(LiveConfig::from(config))),
            client,
        };

        let router = Self::build_router(&router_config, state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(upstream_handler))
            .route("/", any(upstream_handler))
            .layer(middleware::from_fn_with_state(state.clone(), tenant_routing))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(ConcurrencyLimitLayer::new(config.listener.max_connections))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires, applying configuration updates
    /// as they arrive.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<RouterConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let live = self.state.live.clone();
        tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                let current = live.load();
                for field in restart_required_changes(&current.config, &new_config) {
                    tracing::warn!(field, "Change requires a restart; keeping current value");
                }
                tracing::info!(
                    upstream = %new_config.upstream.address,
                    custom_domain = %new_config.domains.custom_domain,
                    "Configuration reloaded"
                );
                live.store(Arc::new(LiveConfig::from(new_config)));
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Current configuration generation.
    pub fn live_config(&self) -> Arc<LiveConfig> {
        self.state.live.load_full()
    }
}

/// Forward the (possibly rewritten) request to the upstream app server.
async fn upstream_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let live = state.live.load_full();
    let request_id = request_id(&request).to_string();

    let (mut parts, body) = request.into_parts();

    let uri = match build_upstream_uri(&live.config.upstream.address, &parts.uri) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Invalid upstream URI");
            return response::bad_gateway();
        }
    };
    tracing::debug!(request_id = %request_id, method = %parts.method, uri = %uri, "Forwarding request");
    parts.uri = uri;

    // Only the router may name the tenant.
    parts.headers.remove(X_TENANT_LABEL);
    if let Some(TenantLabel(label)) = parts.extensions.get::<TenantLabel>() {
        if let Ok(value) = HeaderValue::from_str(label) {
            parts.headers.insert(X_TENANT_LABEL, value);
        }
    }

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(upstream) => {
            metrics::record_upstream(upstream.status().as_u16(), start_time);
            response::from_upstream(upstream)
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            metrics::record_upstream_error();
            response::bad_gateway()
        }
    }
}

/// Fields baked into the listener or layer stack at startup that differ
/// between `current` and `new`.
fn restart_required_changes(current: &RouterConfig, new: &RouterConfig) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if current.listener.bind_address != new.listener.bind_address {
        changed.push("listener.bind_address");
    }
    if current.listener.max_connections != new.listener.max_connections {
        changed.push("listener.max_connections");
    }
    if current.timeouts.request_secs != new.timeouts.request_secs {
        changed.push("timeouts.request_secs");
    }
    if current.timeouts.connect_secs != new.timeouts.connect_secs {
        changed.push("timeouts.connect_secs");
    }
    let (old_obs, new_obs) = (&current.observability, &new.observability);
    if old_obs.log_level != new_obs.log_level {
        changed.push("observability.log_level");
    }
    if old_obs.json_logs != new_obs.json_logs {
        changed.push("observability.json_logs");
    }
    if old_obs.metrics_enabled != new_obs.metrics_enabled {
        changed.push("observability.metrics_enabled");
    }
    if old_obs.metrics_address != new_obs.metrics_address {
        changed.push("observability.metrics_address");
    }
    changed
}

fn build_upstream_uri(upstream: &str, original: &Uri) -> Result<Uri, axum::http::Error> {
    let path_and_query = original.path_and_query().map_or("/", |pq| pq.as_str());
    Uri::builder()
        .scheme(Scheme::HTTP)
        .authority(upstream)
        .path_and_query(path_and_query)
        .build()
}
