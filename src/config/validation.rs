//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module handles the semantic
//! ones, returning every violation rather than just the first.

use crate::config::schema::ProxyConfig;

/// One semantic violation found in a config.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed config for semantic problems.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.cache.capacity_bytes == 0 {
        errors.push(ValidationError {
            field: "cache.capacity_bytes",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.cache.max_object_bytes == 0 {
        errors.push(ValidationError {
            field: "cache.max_object_bytes",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.cache.max_object_bytes > config.cache.capacity_bytes {
        errors.push(ValidationError {
            field: "cache.max_object_bytes",
            message: format!(
                "object cap ({}) exceeds total capacity ({})",
                config.cache.max_object_bytes, config.cache.capacity_bytes
            ),
        });
    }
    if config.forwarding.user_agent.is_empty() {
        errors.push(ValidationError {
            field: "forwarding.user_agent",
            message: "must not be empty".to_string(),
        });
    }
    if config.listener.bind_address.is_empty() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
