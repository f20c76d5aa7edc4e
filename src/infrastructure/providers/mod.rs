//! # Provider Integrations
//!
//! Ports and adapters for the two third-party quote providers.
//!
//! [`traits`] defines the ports the quote clients call, [`error`] the
//! transport-fault taxonomy, and [`http`] the reqwest-backed adapters.

pub mod error;
pub mod http;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use http::{HttpHomeInsuranceProvider, HttpMortgageProvider, ProviderHttpClient};
pub use traits::{
    HomeInsuranceProvider, HomeInsuranceProviderRequest, MortgageProvider,
    MortgageProviderRequest, ProviderOffer,
};
