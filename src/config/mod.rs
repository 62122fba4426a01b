//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + ROOT_DOMAIN env
//!     → loader.rs (parse, deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → shared via Arc to the HTTP layer
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of Arc<RouterConfig>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_default, ConfigError, ROOT_DOMAIN_ENV};
pub use schema::{
    DomainConfig, ListenerConfig, ObservabilityConfig, RouterConfig, RoutingConfig,
    TimeoutConfig, UpstreamConfig,
};
