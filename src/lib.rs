//! Hostname-based multi-tenant routing.
//!
//! Requests arriving on a tenant subdomain (`acme.example.com`, preview hosts
//! such as `acme---branch.vercel.app`, or `acme.localhost` in development)
//! have their landing page rewritten to the tenant namespace and their admin
//! paths redirected away. Everything else is forwarded to the upstream
//! application server untouched.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ http::middleware::tenant ──▶ upstream app
//!                                        │
//!                                        ▼
//!                         routing (root domain → label → action)
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RequestTarget, RoutingAction, TenantRouter};
