//! # Quote Orchestrator
//!
//! Fan-out/join coordination of the two quote legs.
//!
//! This module provides the [`QuoteOrchestrator`], which issues the mortgage
//! and home-insurance quote calls concurrently for the same applicant
//! request and assembles the combined response once both legs complete. It
//! evaluates no business rules of its own, and one leg being declined never
//! affects the other: declines travel inside each leg's
//! [`Quote`](crate::domain::quote::Quote).

use crate::application::clients::{HomeInsuranceQuoteClient, MortgageQuoteClient};
use crate::application::error::{QuoteServiceError, QuoteServiceResult};
use crate::domain::quote::{CombinedQuoteResponse, Product, Quote};
use crate::domain::request::QuoteRequest;
use std::sync::Arc;
use tokio::task::JoinError;

/// Coordinates the two quote legs for one applicant request.
///
/// Constructed against the client abstractions so either leg can be
/// substituted or mocked. The orchestrator is stateless and callable
/// concurrently from multiple requests.
#[derive(Debug, Clone)]
pub struct QuoteOrchestrator {
    mortgage: Arc<dyn MortgageQuoteClient>,
    home_insurance: Arc<dyn HomeInsuranceQuoteClient>,
}

impl QuoteOrchestrator {
    /// Creates an orchestrator over the two quote clients.
    #[must_use]
    pub fn new(
        mortgage: Arc<dyn MortgageQuoteClient>,
        home_insurance: Arc<dyn HomeInsuranceQuoteClient>,
    ) -> Self {
        Self {
            mortgage,
            home_insurance,
        }
    }

    /// Computes both quotes concurrently and returns the combined response.
    ///
    /// Both legs are spawned together and joined together; the slow leg
    /// never loses the fast leg's result, and completion order does not
    /// affect which response field a leg populates.
    ///
    /// # Errors
    ///
    /// Returns an error only when a leg raises a transport or computation
    /// fault, or its task dies. Ineligible applicants and empty offer lists
    /// are declines inside the returned quotes, not errors.
    pub async fn get_quotes(
        &self,
        request: QuoteRequest,
    ) -> QuoteServiceResult<CombinedQuoteResponse> {
        let mortgage = Arc::clone(&self.mortgage);
        let mortgage_leg = tokio::spawn(async move { mortgage.get_quote(&request).await });

        let home_insurance = Arc::clone(&self.home_insurance);
        let home_insurance_leg =
            tokio::spawn(async move { home_insurance.get_quote(&request).await });

        let (mortgage_joined, home_insurance_joined) =
            tokio::join!(mortgage_leg, home_insurance_leg);

        let mortgage_quote = join_leg(Product::Mortgage, mortgage_joined)?;
        let home_insurance_quote = join_leg(Product::HomeInsurance, home_insurance_joined)?;

        Ok(CombinedQuoteResponse::new(
            mortgage_quote,
            home_insurance_quote,
        ))
    }
}

/// Unwraps one joined leg, surfacing a dead task as a leg failure.
fn join_leg(
    product: Product,
    joined: Result<QuoteServiceResult<Quote>, JoinError>,
) -> QuoteServiceResult<Quote> {
    match joined {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(%product, error = %e, "quote leg task failed");
            Err(QuoteServiceError::leg_failure(product, e.to_string()))
        }
    }
}
