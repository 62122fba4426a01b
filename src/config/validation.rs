//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, domain shapes and path prefixes
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is not a socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must start with '{expected}': {value}")]
    MissingPrefix {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{field} must not start with '{unexpected}': {value}")]
    UnexpectedPrefix {
        field: &'static str,
        unexpected: &'static str,
        value: String,
    },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    check_address(&mut errors, "upstream.address", &config.upstream.address);

    if config.listener.max_connections == 0 {
        errors.push(ValidationError::Zero { field: "listener.max_connections" });
    }

    let domains = &config.domains;
    check_not_empty(&mut errors, "domains.local_root", &domains.local_root);
    check_not_empty(&mut errors, "domains.preview_separator", &domains.preview_separator);
    if !domains.platform_suffix.starts_with('.') {
        errors.push(ValidationError::MissingPrefix {
            field: "domains.platform_suffix",
            expected: ".",
            value: domains.platform_suffix.clone(),
        });
    }
    if domains.custom_domain.is_empty() {
        errors.push(ValidationError::Empty { field: "domains.custom_domain" });
    } else if domains.custom_domain.starts_with('.') {
        errors.push(ValidationError::UnexpectedPrefix {
            field: "domains.custom_domain",
            unexpected: ".",
            value: domains.custom_domain.clone(),
        });
    }

    let routing = &config.routing;
    check_path(&mut errors, "routing.tenant_path_prefix", &routing.tenant_path_prefix);
    check_path(&mut errors, "routing.admin_prefix", &routing.admin_prefix);
    check_path(&mut errors, "routing.redirect_path", &routing.redirect_path);
    for prefix in &routing.excluded_prefixes {
        if prefix.is_empty() {
            errors.push(ValidationError::Empty { field: "routing.excluded_prefixes" });
        } else if prefix.starts_with('/') {
            errors.push(ValidationError::UnexpectedPrefix {
                field: "routing.excluded_prefixes",
                unexpected: "/",
                value: prefix.clone(),
            });
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero { field: "timeouts.request_secs" });
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::Zero { field: "timeouts.connect_secs" });
    }

    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_not_empty(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(ValidationError::Empty { field });
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(ValidationError::Empty { field });
    } else if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_path(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if !value.starts_with('/') {
        errors.push(ValidationError::MissingPrefix {
            field,
            expected: "/",
            value: value.to_string(),
        });
    }
}
