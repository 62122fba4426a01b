//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tenant_router_decisions_total` (counter): routing outcomes by action
//! - `tenant_router_request_duration_seconds` (histogram): upstream latency by status
//! - `tenant_router_upstream_errors_total` (counter): failed upstream requests
//!
//! Recording is a no-op until a recorder is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one routing outcome (`continue`, `rewrite`, `redirect`, `excluded`).
pub fn record_decision(action: &'static str) {
    counter!("tenant_router_decisions_total", "action" => action).increment(1);
}

pub fn record_upstream(status: u16, start_time: Instant) {
    histogram!("tenant_router_request_duration_seconds", "status" => status.to_string())
        .record(start_time.elapsed().as_secs_f64());
}

pub fn record_upstream_error() {
    counter!("tenant_router_upstream_errors_total").increment(1);
}
