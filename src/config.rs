//! Storefront configuration.
//!
//! Everything has a default, so `StorefrontConfig::default()` is a working configuration
//! against a local commerce service. A TOML document can override individual fields:
//!
//! ```toml
//! base_url = "http://shop.internal:8000"
//! request_timeout_secs = 10
//! purchase_policy = "require_loaded_catalog"
//! in_flight_guard = true
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// What to do when a purchase is attempted for a product the client cannot vouch for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchasePolicy {
    /// Send the order regardless and let the service decide.
    #[default]
    ServerValidates,
    /// Reject client-side unless the catalog loaded and contains the product.
    RequireLoadedCatalog,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Origin of the commerce service, without a trailing path.
    pub base_url: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout_secs: Option<u64>,
    pub purchase_policy: PurchasePolicy,
    /// Reject a second submission for a product while the first is pending.
    pub in_flight_guard: bool,
    pub mailbox_capacity: usize,
    pub event_capacity: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            purchase_policy: PurchasePolicy::default(),
            in_flight_guard: true,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_purchase_policy(mut self, policy: PurchasePolicy) -> Self {
        self.purchase_policy = policy;
        self
    }

    pub fn with_in_flight_guard(mut self, enabled: bool) -> Self {
        self.in_flight_guard = enabled;
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Validation("base_url cannot be empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "base_url `{base_url}` must start with http:// or https://"
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Validation(
                "mailbox_capacity must be greater than zero".to_string(),
            ));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Validation(
                "event_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.purchase_policy, PurchasePolicy::ServerValidates);
        assert!(config.in_flight_guard);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn toml_overrides_only_given_fields() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            base_url = "https://shop.example.com"
            request_timeout_secs = 5
            purchase_policy = "require_loaded_catalog"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://shop.example.com");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.purchase_policy, PurchasePolicy::RequireLoadedCatalog);
        assert!(config.in_flight_guard);
        assert_eq!(config.mailbox_capacity, DEFAULT_MAILBOX_CAPACITY);
    }

    #[test]
    fn rejects_bad_values() {
        let err = StorefrontConfig::from_toml_str(r#"base_url = "ftp://shop""#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = StorefrontConfig::from_toml_str("mailbox_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = StorefrontConfig::from_toml_str("unknown_key = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
