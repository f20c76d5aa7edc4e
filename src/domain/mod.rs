//! # Domain Layer
//!
//! Core types of the quote engine.
//!
//! ## Request & Outcomes
//!
//! - [`request::QuoteRequest`]: the applicant's house value and deposit
//! - [`quote::Quote`]: the tagged outcome of one quote leg
//! - [`quote::CombinedQuoteResponse`]: both legs of one orchestration
//!
//! ## Arithmetic
//!
//! - [`arithmetic::CheckedArithmetic`]: safe `Decimal` operations
//! - [`arithmetic::round_to_minor_units`]: rounding to pence

pub mod arithmetic;
pub mod quote;
pub mod request;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, round_to_minor_units};
pub use quote::{CombinedQuoteResponse, DeclineReason, Product, Quote};
pub use request::QuoteRequest;
