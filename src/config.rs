//! # Engine Configuration
//!
//! Configuration for the quote engine.
//!
//! This module provides the policy and endpoint settings the engine is
//! constructed from: the fixed contents value the home-insurance client
//! quotes with, and the endpoint/timeout settings of the two provider
//! adapters. Settings load from a TOML file layered with
//! `HOMEQUOTE_`-prefixed environment variables.
//!
//! # Examples
//!
//! ```
//! use homequote::config::HomeInsuranceConfig;
//! use rust_decimal::Decimal;
//!
//! let config = HomeInsuranceConfig::default();
//! assert_eq!(config.contents_value(), Decimal::new(50_000, 0));
//! ```

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default contents cover in whole currency units.
const DEFAULT_CONTENTS_VALUE: u64 = 50_000;

/// Default provider request timeout in milliseconds.
const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 5_000;

/// Environment variable prefix for overrides.
const ENV_PREFIX: &str = "HOMEQUOTE";

fn default_contents_value() -> Decimal {
    Decimal::from(DEFAULT_CONTENTS_VALUE)
}

fn default_timeout_ms() -> u64 {
    DEFAULT_PROVIDER_TIMEOUT_MS
}

/// Policy settings for the home-insurance client.
///
/// The contents value is a policy constant applied to every request, not
/// applicant data; it is fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeInsuranceConfig {
    /// Contents cover included in every insurance request.
    #[serde(default = "default_contents_value")]
    contents_value: Decimal,
}

impl Default for HomeInsuranceConfig {
    fn default() -> Self {
        Self {
            contents_value: default_contents_value(),
        }
    }
}

impl HomeInsuranceConfig {
    /// Sets the contents value.
    #[must_use]
    pub fn with_contents_value(mut self, contents_value: Decimal) -> Self {
        self.contents_value = contents_value;
        self
    }

    /// Returns the contents value.
    #[inline]
    #[must_use]
    pub fn contents_value(&self) -> Decimal {
        self.contents_value
    }
}

/// Endpoint settings for one provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoint {
    /// Full URL of the provider's quotes endpoint.
    url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

impl ProviderEndpoint {
    /// Creates an endpoint with the default timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the endpoint URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the request timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEngineConfig {
    /// Home-insurance policy settings.
    #[serde(default)]
    home_insurance: HomeInsuranceConfig,
    /// Mortgage provider endpoint.
    mortgage_provider: ProviderEndpoint,
    /// Home-insurance provider endpoint.
    home_insurance_provider: ProviderEndpoint,
}

impl QuoteEngineConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub fn new(
        home_insurance: HomeInsuranceConfig,
        mortgage_provider: ProviderEndpoint,
        home_insurance_provider: ProviderEndpoint,
    ) -> Self {
        Self {
            home_insurance,
            mortgage_provider,
            home_insurance_provider,
        }
    }

    /// Loads configuration from a TOML file, layered with
    /// `HOMEQUOTE_`-prefixed environment variables
    /// (e.g. `HOMEQUOTE_MORTGAGE_PROVIDER__URL`).
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read, a value cannot
    /// be deserialized, or validation fails.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the contents value is negative or either
    /// endpoint URL is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_insurance.contents_value().is_sign_negative() {
            return Err(ConfigError::Message(
                "contents value must not be negative".to_string(),
            ));
        }
        if self.mortgage_provider.url().is_empty() {
            return Err(ConfigError::Message(
                "mortgage provider URL must not be empty".to_string(),
            ));
        }
        if self.home_insurance_provider.url().is_empty() {
            return Err(ConfigError::Message(
                "home-insurance provider URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the home-insurance policy settings.
    #[inline]
    #[must_use]
    pub fn home_insurance(&self) -> &HomeInsuranceConfig {
        &self.home_insurance
    }

    /// Returns the mortgage provider endpoint.
    #[inline]
    #[must_use]
    pub fn mortgage_provider(&self) -> &ProviderEndpoint {
        &self.mortgage_provider
    }

    /// Returns the home-insurance provider endpoint.
    #[inline]
    #[must_use]
    pub fn home_insurance_provider(&self) -> &ProviderEndpoint {
        &self.home_insurance_provider
    }
}
