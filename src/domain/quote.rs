//! # Quote Outcomes
//!
//! Tagged quote results and the combined response.
//!
//! This module provides [`Quote`], the per-product outcome of a quote leg,
//! [`DeclineReason`] describing why a leg produced no price, and
//! [`CombinedQuoteResponse`] holding both legs of one orchestration.
//!
//! A quote is always either a monthly payment or a decline reason, never an
//! absent value: business-rule failures are data, not faults.
//!
//! # Examples
//!
//! ```
//! use homequote::domain::quote::{DeclineReason, Quote};
//! use rust_decimal::Decimal;
//!
//! let quote = Quote::succeeded(Decimal::new(700, 0));
//! assert!(quote.is_succeeded());
//! assert_eq!(quote.monthly_payment(), Some(Decimal::new(700, 0)));
//!
//! let quote = Quote::declined(DeclineReason::NoOffers);
//! assert_eq!(quote.monthly_payment(), None);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two quoted products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Product {
    /// The mortgage leg.
    Mortgage,
    /// The home-insurance leg.
    HomeInsurance,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mortgage => write!(f, "mortgage"),
            Self::HomeInsurance => write!(f, "home insurance"),
        }
    }
}

/// Reason a quote leg was declined.
///
/// Every variant is a business-rule outcome with a fixed, human-readable
/// reason string rendered by `Display`. The house-value wording is
/// product-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclineReason {
    /// The loan-to-value ratio exceeds the 90% policy limit, or the ratio
    /// is undefined because the house value is zero.
    LoanToValueTooHigh,
    /// The house value exceeds the ten million ceiling.
    HouseValueTooHigh(Product),
    /// The third-party provider returned no offers.
    NoOffers,
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoanToValueTooHigh => {
                write!(f, "Loan to value cannot be bigger than 90%")
            }
            Self::HouseValueTooHigh(Product::Mortgage) => {
                write!(f, "Quotes cannot be provided for houses worth over £10 million")
            }
            Self::HouseValueTooHigh(Product::HomeInsurance) => {
                write!(f, "Quotes cannot be provided for house worth over £10 million")
            }
            Self::NoOffers => write!(f, "No quotes returned from third party"),
        }
    }
}

/// The outcome of one quote leg.
///
/// Exactly one payload is populated: a successful quote carries the cheapest
/// monthly payment found, a declined quote carries the reason. Constructed
/// once by the owning client per request and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Quote {
    /// A price was found.
    Succeeded {
        /// The cheapest monthly payment among the provider's offers.
        monthly_payment: Decimal,
    },
    /// No price is available for this applicant.
    Declined {
        /// Why the leg produced no price.
        reason: DeclineReason,
    },
}

impl Quote {
    /// Creates a successful quote carrying the given monthly payment.
    #[must_use]
    pub fn succeeded(monthly_payment: Decimal) -> Self {
        Self::Succeeded { monthly_payment }
    }

    /// Creates a declined quote carrying the given reason.
    #[must_use]
    pub fn declined(reason: DeclineReason) -> Self {
        Self::Declined { reason }
    }

    /// Returns true if this quote carries a monthly payment.
    #[inline]
    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Returns the monthly payment, if the quote succeeded.
    #[inline]
    #[must_use]
    pub fn monthly_payment(&self) -> Option<Decimal> {
        match self {
            Self::Succeeded { monthly_payment } => Some(*monthly_payment),
            Self::Declined { .. } => None,
        }
    }

    /// Returns the decline reason, if the quote was declined.
    #[inline]
    #[must_use]
    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Declined { reason } => Some(*reason),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded { monthly_payment } => {
                write!(f, "Quote({}/month)", monthly_payment)
            }
            Self::Declined { reason } => write!(f, "Quote(declined: {})", reason),
        }
    }
}

/// Both quote legs of one orchestration, in one response.
///
/// Each leg is populated from its own client's result; one leg being
/// declined never affects the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedQuoteResponse {
    /// Outcome of the mortgage leg.
    mortgage_quote: Quote,
    /// Outcome of the home-insurance leg.
    home_insurance_quote: Quote,
}

impl CombinedQuoteResponse {
    /// Creates a combined response from the two leg outcomes.
    #[must_use]
    pub fn new(mortgage_quote: Quote, home_insurance_quote: Quote) -> Self {
        Self {
            mortgage_quote,
            home_insurance_quote,
        }
    }

    /// Returns the mortgage leg's outcome.
    #[inline]
    #[must_use]
    pub fn mortgage_quote(&self) -> &Quote {
        &self.mortgage_quote
    }

    /// Returns the home-insurance leg's outcome.
    #[inline]
    #[must_use]
    pub fn home_insurance_quote(&self) -> &Quote {
        &self.home_insurance_quote
    }
}
