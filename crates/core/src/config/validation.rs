//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, flags, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `endpoint` is empty
    /// - `retry.factor` is below 1.0 or not finite
    /// - `retry.base_delay_ms` exceeds `retry.max_delay_ms`
    /// - `retry.unbounded` is set with a zero `retry.base_delay_ms`
    ///
    /// Call once, after every override has been applied: an unbounded retry
    /// policy is logged as a warning here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "endpoint".into(), reason: "must not be empty".into() });
        }

        if !self.retry.factor.is_finite() || self.retry.factor < 1.0 {
            return Err(ConfigError::Invalid { field: "retry.factor".into(), reason: "must be at least 1.0".into() });
        }

        if self.retry.base_delay_ms > self.retry.max_delay_ms {
            return Err(ConfigError::Invalid {
                field: "retry.base_delay_ms".into(),
                reason: "must not exceed retry.max_delay_ms".into(),
            });
        }

        if self.retry.unbounded && self.retry.base_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "retry.base_delay_ms".into(),
                reason: "must be greater than 0 when retry.unbounded is set".into(),
            });
        }

        if self.retry.unbounded {
            tracing::warn!(
                interval_ms = self.retry.base_delay_ms,
                "unbounded retry enabled; a stuck endpoint will stall the run"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetrySettings;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = AppConfig { timeout_ms: 50, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_timeout_exceeds_limit() {
        let config = AppConfig { timeout_ms: 301_000, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let config = AppConfig { endpoint: " ".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "endpoint"));
    }

    #[test]
    fn test_validate_retry_factor() {
        let retry = RetrySettings { factor: 0.5, ..Default::default() };
        let config = AppConfig { retry, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "retry.factor"));

        let retry = RetrySettings { factor: f64::NAN, ..Default::default() };
        let config = AppConfig { retry, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_retry_delays() {
        let retry = RetrySettings { base_delay_ms: 10_000, max_delay_ms: 1_000, ..Default::default() };
        let config = AppConfig { retry, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "retry.base_delay_ms"));
    }

    #[test]
    fn test_validate_edge_case_values() {
        let retry = RetrySettings { factor: 1.0, base_delay_ms: 0, max_delay_ms: 0, ..Default::default() };
        let config = AppConfig { timeout_ms: 100, delay_ms: 0, retry, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unbounded_needs_interval() {
        let retry = RetrySettings { unbounded: true, base_delay_ms: 0, max_delay_ms: 0, ..Default::default() };
        let config = AppConfig { retry, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "retry.base_delay_ms"));

        let retry = RetrySettings { unbounded: true, base_delay_ms: 1, ..Default::default() };
        let config = AppConfig { retry, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
