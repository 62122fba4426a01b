//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable supplying the fallback root domain.
pub const ROOT_DOMAIN_ENV: &str = "ROOT_DOMAIN";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RouterConfig = toml::from_str(&content)?;
    finalize(config, root_domain_from_env())
}

/// Default configuration with environment overrides applied, for runs
/// without a config file.
pub fn load_default() -> Result<RouterConfig, ConfigError> {
    finalize(RouterConfig::default(), root_domain_from_env())
}

fn root_domain_from_env() -> Option<String> {
    std::env::var(ROOT_DOMAIN_ENV).ok()
}

fn finalize(
    mut config: RouterConfig,
    root_domain: Option<String>,
) -> Result<RouterConfig, ConfigError> {
    apply_env_overrides(&mut config, root_domain);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply the `ROOT_DOMAIN` value, if any. Empty values are ignored.
pub fn apply_env_overrides(config: &mut RouterConfig, root_domain: Option<String>) {
    if let Some(root) = root_domain.filter(|r| !r.is_empty()) {
        config.domains.fallback_root_domain = Some(root);
    }
}
