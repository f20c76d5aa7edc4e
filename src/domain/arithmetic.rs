//! # Checked Arithmetic
//!
//! Safe arithmetic for monetary amounts.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`round_to_minor_units`] - Rounding to the currency's minor-unit precision
//!
//! # Examples
//!
//! ```
//! use homequote::domain::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let house_value = Decimal::new(100_000, 0);
//! let deposit = Decimal::new(10_000, 0);
//! let loan = house_value.safe_sub(deposit);
//! assert!(loan.is_ok());
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places in the currency's minor unit (pence).
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Error type for arithmetic operations.
///
/// Represents failures that can occur during checked arithmetic on
/// monetary amounts, including overflow, underflow, and division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds a monetary amount to the currency's minor-unit precision.
///
/// Uses half-up rounding (midpoints round away from zero), matching how
/// monetary amounts are conventionally rounded to pence.
///
/// # Examples
///
/// ```
/// use homequote::domain::arithmetic::round_to_minor_units;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(90_000_005, 3); // 90000.005
/// assert_eq!(round_to_minor_units(amount), Decimal::new(9_000_001, 2));
/// ```
#[inline]
#[must_use = "this returns the rounded amount, without modifying the original"]
pub fn round_to_minor_units(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow, underflow, or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}
