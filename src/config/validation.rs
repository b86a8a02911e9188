//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the origin is an absolute http/https URL
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a [`RelayConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No origin was supplied by flag, environment, or config file.
    #[error("backend origin is not configured")]
    MissingOrigin,

    /// The origin string does not parse as an absolute URL.
    #[error("backend origin {0:?} is not a valid URL: {1}")]
    InvalidOrigin(String, String),

    /// The origin URL uses a scheme the relay cannot speak.
    #[error("backend origin {0:?} must use http or https")]
    UnsupportedScheme(String),

    /// A timeout value of zero would make every exchange fail.
    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a resolved configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.origin.as_deref() {
        None => errors.push(ValidationError::MissingOrigin),
        Some(origin) => match Url::parse(origin) {
            Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
                errors.push(ValidationError::UnsupportedScheme(origin.to_string()));
            }
            Ok(_) => {}
            Err(e) => {
                errors.push(ValidationError::InvalidOrigin(origin.to_string(), e.to_string()));
            }
        },
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origin(origin: &str) -> RelayConfig {
        RelayConfig {
            origin: Some(origin.to_string()),
            ..RelayConfig::default()
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&config_with_origin("http://127.0.0.1:8080")).is_ok());
        assert!(validate_config(&config_with_origin("https://backend.internal")).is_ok());
    }

    #[test]
    fn test_missing_origin() {
        let errors = validate_config(&RelayConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingOrigin]);
    }

    #[test]
    fn test_bad_scheme() {
        let errors = validate_config(&config_with_origin("ftp://files.internal")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsupportedScheme("ftp://files.internal".to_string())]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RelayConfig::default();
        config.timeouts.connect_secs = 0;
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::MissingOrigin));
        assert!(errors.contains(&ValidationError::ZeroTimeout("connect")));
        assert!(errors.contains(&ValidationError::ZeroTimeout("request")));
    }

    #[test]
    fn test_relative_origin_rejected() {
        let errors = validate_config(&config_with_origin("127.0.0.1:8080")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::UnsupportedScheme(_) | ValidationError::InvalidOrigin(..)));
    }
}
