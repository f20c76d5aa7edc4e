//! # homequote
//!
//! Combined mortgage and home-insurance quote engine.
//!
//! For a single applicant request the engine calls two independent
//! third-party quote providers, validates business eligibility rules
//! locally, selects the cheapest offer from each provider, and returns a
//! combined result even when one or both legs decline.
//!
//! # Architecture
//!
//! ```text
//! caller
//!   └── QuoteOrchestrator            (application) fan-out of exactly 2, join-all
//!         ├── MortgageClient         (application) LTV + ceiling gates, amount translation
//!         │     └── MortgageProvider (infrastructure port)
//!         └── HomeInsuranceClient    (application) ceiling gate, contents-value policy
//!               └── HomeInsuranceProvider (infrastructure port)
//! ```
//!
//! Business-rule failures never surface as errors: every decline is carried
//! inside a [`Quote`] with an inspectable reason, so a combined response is
//! always assembled from whatever each leg produced. Only transport faults
//! and dead leg tasks escape as [`QuoteServiceError`].
//!
//! # Examples
//!
//! ```ignore
//! use homequote::{
//!     HomeInsuranceClient, MortgageClient, QuoteOrchestrator, QuoteRequest,
//! };
//! use std::sync::Arc;
//!
//! let orchestrator = QuoteOrchestrator::new(
//!     Arc::new(MortgageClient::new(mortgage_provider)),
//!     Arc::new(HomeInsuranceClient::with_defaults(insurance_provider)),
//! );
//!
//! let response = orchestrator.get_quotes(QuoteRequest::new(house_value, deposit)).await?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::clients::{
    HomeInsuranceClient, HomeInsuranceQuoteClient, MortgageClient, MortgageQuoteClient,
};
pub use application::error::{QuoteServiceError, QuoteServiceResult};
pub use application::orchestrator::QuoteOrchestrator;
pub use config::{HomeInsuranceConfig, ProviderEndpoint, QuoteEngineConfig};
pub use domain::quote::{CombinedQuoteResponse, DeclineReason, Product, Quote};
pub use domain::request::QuoteRequest;
pub use infrastructure::providers::error::{ProviderError, ProviderResult};
pub use infrastructure::providers::http::{HttpHomeInsuranceProvider, HttpMortgageProvider};
pub use infrastructure::providers::traits::{
    HomeInsuranceProvider, HomeInsuranceProviderRequest, MortgageProvider,
    MortgageProviderRequest, ProviderOffer,
};
