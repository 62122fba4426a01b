//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID, routing view of the request)
//!     → middleware/tenant.rs (exclude, classify, rewrite or redirect)
//!     → server.rs (forward to upstream app server)
//!     → response.rs (pass through, redirect, error mapping)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer, LiveConfig, X_TENANT_LABEL};
