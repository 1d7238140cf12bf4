//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject the production network until it is enabled
//! - Validate value ranges (budgets and timeouts non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before a gateway is constructed, never per-call

use thiserror::Error;
use url::Url;

use crate::config::schema::{ClientConfig, Network};

/// A single reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api_key must not be empty")]
    MissingApiKey,

    #[error("mainnet is not supported yet")]
    MainnetNotEnabled,

    #[error("endpoint_override is not a valid URL: {0}")]
    InvalidEndpointOverride(String),

    #[error("http_timeout_secs must be greater than zero")]
    ZeroHttpTimeout,

    #[error("{section}.max_errors must be greater than zero")]
    ZeroErrorBudget { section: &'static str },

    #[error("{section}.deadline_secs must be greater than zero")]
    ZeroDeadline { section: &'static str },
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    if config.network == Network::Mainnet {
        errors.push(ValidationError::MainnetNotEnabled);
    }

    if let Some(endpoint) = &config.endpoint_override {
        if Url::parse(endpoint).is_err() {
            errors.push(ValidationError::InvalidEndpointOverride(endpoint.clone()));
        }
    }

    if config.http_timeout_secs == 0 {
        errors.push(ValidationError::ZeroHttpTimeout);
    }

    for (section, poll) in [
        ("job_poll", &config.job_poll),
        ("inclusion_poll", &config.inclusion_poll),
    ] {
        if poll.max_errors == 0 {
            errors.push(ValidationError::ZeroErrorBudget { section });
        }
        if poll.deadline_secs == 0 {
            errors.push(ValidationError::ZeroDeadline { section });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
