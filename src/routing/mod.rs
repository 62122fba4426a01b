//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (url, host, path)
//!     → matcher.rs (excluded paths bypass routing)
//!     → root_domain.rs (hostname → root domain)
//!     → subdomain.rs (hostname + root → tenant label)
//!     → interceptor.rs (label + path → action)
//!     → Return: Continue, RewriteTo or RedirectTo
//! ```
//!
//! # Design Decisions
//! - Router built from config at startup, immutable at runtime
//! - No regex in hot path (prefix and suffix matching only)
//! - Deterministic: same input always yields the same action
//! - Ordered rule chains, first match wins

pub mod interceptor;
pub mod matcher;
pub mod root_domain;
pub mod router;
pub mod subdomain;
pub mod target;

pub use interceptor::{intercept, RoutingAction};
pub use root_domain::{resolve_root_domain, DomainShape, RootDomain};
pub use router::{Decision, TenantRouter};
pub use subdomain::extract_subdomain;
pub use target::RequestTarget;
