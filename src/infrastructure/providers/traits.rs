//! # Provider Ports
//!
//! Port definitions for the two third-party quote providers.
//!
//! This module defines the [`MortgageProvider`] and [`HomeInsuranceProvider`]
//! traits the quote clients call, together with the wire request shapes and
//! the [`ProviderOffer`] both providers return. Offer order on the wire is
//! unspecified; callers must select the cheapest offer themselves.
//!
//! # Examples
//!
//! ```ignore
//! use homequote::infrastructure::providers::traits::MortgageProvider;
//!
//! // Implement MortgageProvider for your integration
//! #[derive(Debug)]
//! struct MyMortgageApi { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl MortgageProvider for MyMortgageApi {
//!     // ... implement get_quotes
//! }
//! ```

use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire request sent to the mortgage provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageProviderRequest {
    /// The amount being borrowed, rounded to minor units.
    pub mortgage_amount: Decimal,
}

/// Wire request sent to the home-insurance provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeInsuranceProviderRequest {
    /// The value of the house being insured.
    pub house_value: Decimal,
    /// The contents cover, a policy constant rather than applicant data.
    pub contents_value: Decimal,
}

/// A single priced offer returned by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOffer {
    /// The monthly payment this offer would cost.
    pub monthly_payment: Decimal,
}

/// Port for the third-party mortgage quote API.
///
/// Implementations own transport, serialization, and authentication.
/// A reachable provider with nothing to offer returns an empty list,
/// not an error.
#[async_trait]
pub trait MortgageProvider: Send + Sync + fmt::Debug {
    /// Fetches all offers for the given mortgage amount.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::infrastructure::providers::error::ProviderError`]
    /// only for transport or protocol faults.
    async fn get_quotes(
        &self,
        request: &MortgageProviderRequest,
    ) -> ProviderResult<Vec<ProviderOffer>>;
}

/// Port for the third-party home-insurance quote API.
#[async_trait]
pub trait HomeInsuranceProvider: Send + Sync + fmt::Debug {
    /// Fetches all offers for the given house and contents values.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::infrastructure::providers::error::ProviderError`]
    /// only for transport or protocol faults.
    async fn get_quotes(
        &self,
        request: &HomeInsuranceProviderRequest,
    ) -> ProviderResult<Vec<ProviderOffer>>;
}
