//! # Application Errors
//!
//! Error types for the quote services.
//!
//! These are the genuine faults a quote call can raise. Business-rule
//! declines are not errors: they are carried inside
//! [`crate::domain::quote::Quote`] and reach the caller as data.
//!
//! # Error Hierarchy
//!
//! ```text
//! QuoteServiceError
//! ├── Provider(ProviderError)      - Transport/protocol fault from a provider
//! ├── Arithmetic(ArithmeticError)  - Monetary computation fault
//! └── LegFailure                   - A quote leg task died before completing
//! ```

use crate::domain::arithmetic::ArithmeticError;
use crate::domain::quote::Product;
use crate::infrastructure::providers::error::ProviderError;
use thiserror::Error;

/// Error type for quote service operations.
#[derive(Debug, Error)]
pub enum QuoteServiceError {
    /// A provider call failed at the transport or protocol level.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A monetary computation could not be performed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// A spawned quote leg terminated without producing a result.
    #[error("{product} quote leg failed: {message}")]
    LegFailure {
        /// Which leg died.
        product: Product,
        /// Description of the task failure.
        message: String,
    },
}

impl QuoteServiceError {
    /// Creates a leg failure error.
    #[must_use]
    pub fn leg_failure(product: Product, message: impl Into<String>) -> Self {
        Self::LegFailure {
            product,
            message: message.into(),
        }
    }
}

/// Result type for quote service operations.
pub type QuoteServiceResult<T> = Result<T, QuoteServiceError>;
