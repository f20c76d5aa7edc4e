//! # Quote Request
//!
//! The applicant request both quote legs are computed from.
//!
//! This module provides [`QuoteRequest`], the immutable pair of monetary
//! amounts describing the applicant's house purchase, along with the
//! derived loan figures the mortgage eligibility rules are evaluated on.
//!
//! # Examples
//!
//! ```
//! use homequote::domain::request::QuoteRequest;
//! use rust_decimal::Decimal;
//!
//! let request = QuoteRequest::new(Decimal::new(100_000, 0), Decimal::new(10_000, 0));
//! assert_eq!(request.loan_to_value().unwrap(), Decimal::new(9, 1));
//! ```

use crate::domain::arithmetic::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An applicant's request for combined quotes.
///
/// Both amounts are in the same currency unit. The request is not validated
/// on construction: a zero house value or a deposit exceeding the house
/// value are representable and are handled by the eligibility rules of the
/// individual quote clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// The value of the house being purchased.
    house_value: Decimal,
    /// The deposit the applicant is putting down.
    deposit: Decimal,
}

impl QuoteRequest {
    /// Creates a new quote request.
    #[must_use]
    pub fn new(house_value: Decimal, deposit: Decimal) -> Self {
        Self {
            house_value,
            deposit,
        }
    }

    /// Returns the house value.
    #[inline]
    #[must_use]
    pub fn house_value(&self) -> Decimal {
        self.house_value
    }

    /// Returns the deposit.
    #[inline]
    #[must_use]
    pub fn deposit(&self) -> Decimal {
        self.deposit
    }

    /// Returns the loan amount: house value minus deposit.
    ///
    /// May be negative when the deposit exceeds the house value.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the subtraction cannot be
    /// represented.
    pub fn loan_amount(&self) -> ArithmeticResult<Decimal> {
        self.house_value.safe_sub(self.deposit)
    }

    /// Returns the loan-to-value ratio: loan amount over house value.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` when the house value is
    /// zero, in which case the ratio is undefined.
    pub fn loan_to_value(&self) -> ArithmeticResult<Decimal> {
        self.loan_amount()?.safe_div(self.house_value)
    }
}

impl fmt::Display for QuoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuoteRequest(house_value={}, deposit={})",
            self.house_value, self.deposit
        )
    }
}
