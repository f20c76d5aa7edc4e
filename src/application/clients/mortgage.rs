//! # Mortgage Quote Client
//!
//! Provider-backed implementation of the mortgage capability.
//!
//! Eligibility gates run in order before any network call: the
//! loan-to-value policy (at most 90%, inclusive), then the house-value
//! ceiling. Either gate declining short-circuits the rest of the call.

use crate::application::clients::{
    MortgageQuoteClient, cheapest_offer, house_value_ceiling,
};
use crate::application::error::QuoteServiceResult;
use crate::domain::arithmetic::round_to_minor_units;
use crate::domain::quote::{DeclineReason, Product, Quote};
use crate::domain::request::QuoteRequest;
use crate::infrastructure::providers::traits::{MortgageProvider, MortgageProviderRequest};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Upper bound on the loan-to-value ratio, inclusive.
fn loan_to_value_limit() -> Decimal {
    Decimal::new(90, 2)
}

/// Mortgage quote client backed by a third-party provider.
#[derive(Debug, Clone)]
pub struct MortgageClient {
    provider: Arc<dyn MortgageProvider>,
}

impl MortgageClient {
    /// Creates a client over the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn MortgageProvider>) -> Self {
        Self { provider }
    }

    fn loan_to_value_is_eligible(request: &QuoteRequest) -> bool {
        match request.loan_to_value() {
            Ok(ltv) => ltv <= loan_to_value_limit(),
            // Undefined ratio (zero house value) cannot satisfy the gate.
            Err(_) => false,
        }
    }

    fn house_value_is_eligible(request: &QuoteRequest) -> bool {
        request.house_value() <= house_value_ceiling()
    }
}

#[async_trait]
impl MortgageQuoteClient for MortgageClient {
    async fn get_quote(&self, request: &QuoteRequest) -> QuoteServiceResult<Quote> {
        if !Self::loan_to_value_is_eligible(request) {
            tracing::debug!(%request, "mortgage declined: loan-to-value above limit");
            return Ok(Quote::declined(DeclineReason::LoanToValueTooHigh));
        }
        if !Self::house_value_is_eligible(request) {
            tracing::debug!(%request, "mortgage declined: house value above ceiling");
            return Ok(Quote::declined(DeclineReason::HouseValueTooHigh(
                Product::Mortgage,
            )));
        }

        let mortgage_amount = round_to_minor_units(request.loan_amount()?);
        let offers = self
            .provider
            .get_quotes(&MortgageProviderRequest { mortgage_amount })
            .await?;

        match cheapest_offer(&offers) {
            Some(offer) => Ok(Quote::succeeded(offer.monthly_payment)),
            None => Ok(Quote::declined(DeclineReason::NoOffers)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
    use crate::infrastructure::providers::traits::ProviderOffer;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct MockMortgageProvider {
        result: ProviderResult<Vec<ProviderOffer>>,
        requests: Mutex<Vec<MortgageProviderRequest>>,
    }

    impl MockMortgageProvider {
        fn with_offers(payments: &[i64]) -> Self {
            Self {
                result: Ok(payments
                    .iter()
                    .map(|p| ProviderOffer {
                        monthly_payment: Decimal::new(*p, 0),
                    })
                    .collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self::with_offers(&[])
        }

        fn failing(error: ProviderError) -> Self {
            Self {
                result: Err(error),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> MortgageProviderRequest {
            *self.requests.lock().unwrap().last().unwrap()
        }
    }

    #[async_trait]
    impl MortgageProvider for MockMortgageProvider {
        async fn get_quotes(
            &self,
            request: &MortgageProviderRequest,
        ) -> ProviderResult<Vec<ProviderOffer>> {
            self.requests.lock().unwrap().push(*request);
            self.result.clone()
        }
    }

    fn request(house_value: i64, deposit: i64) -> QuoteRequest {
        QuoteRequest::new(Decimal::new(house_value, 0), Decimal::new(deposit, 0))
    }

    #[tokio::test]
    async fn ltv_above_limit_declines_without_calling_provider() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        // 90,001 / 100,000 is just over the limit.
        let quote = client.get_quote(&request(100_000, 9_999)).await.unwrap();

        assert_eq!(
            quote.decline_reason(),
            Some(DeclineReason::LoanToValueTooHigh)
        );
        assert_eq!(
            quote.decline_reason().unwrap().to_string(),
            "Loan to value cannot be bigger than 90%"
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn ltv_at_exact_boundary_is_eligible() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        // 90,000 / 100,000 is exactly 0.90.
        let quote = client.get_quote(&request(100_000, 10_000)).await.unwrap();

        assert_eq!(quote.monthly_payment(), Some(Decimal::new(300, 0)));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn zero_house_value_declines_ltv_without_calling_provider() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        let quote = client.get_quote(&request(0, 0)).await.unwrap();

        assert_eq!(
            quote.decline_reason(),
            Some(DeclineReason::LoanToValueTooHigh)
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn house_value_over_ceiling_declines_without_calling_provider() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        // LTV is fine here; the ceiling is what declines.
        let quote = client
            .get_quote(&request(10_000_001, 1_100_000))
            .await
            .unwrap();

        assert_eq!(
            quote.decline_reason(),
            Some(DeclineReason::HouseValueTooHigh(Product::Mortgage))
        );
        assert_eq!(
            quote.decline_reason().unwrap().to_string(),
            "Quotes cannot be provided for houses worth over £10 million"
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn house_value_at_ceiling_is_eligible() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        let quote = client
            .get_quote(&request(10_000_000, 1_000_000))
            .await
            .unwrap();

        assert_eq!(quote.monthly_payment(), Some(Decimal::new(300, 0)));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn provider_receives_loan_amount_rounded_to_pence() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        client.get_quote(&request(100_000, 10_000)).await.unwrap();

        assert_eq!(
            provider.last_request().mortgage_amount,
            Decimal::new(9_000_000, 2)
        );
    }

    #[tokio::test]
    async fn fractional_loan_amount_is_rounded_half_up() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        // Loan comes to 90000.005 at a comfortable loan-to-value.
        let applicant = QuoteRequest::new(
            Decimal::new(200_000, 0),
            Decimal::new(109_999_995, 3), // 109999.995
        );
        client.get_quote(&applicant).await.unwrap();

        assert_eq!(
            provider.last_request().mortgage_amount,
            Decimal::new(9_000_001, 2) // 90000.01
        );
    }

    #[tokio::test]
    async fn returns_cheapest_offer() {
        let provider = Arc::new(MockMortgageProvider::with_offers(&[300, 299]));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        let quote = client.get_quote(&request(100_000, 10_000)).await.unwrap();

        assert_eq!(quote.monthly_payment(), Some(Decimal::new(299, 0)));
    }

    #[tokio::test]
    async fn empty_offer_list_declines_with_no_offers() {
        let provider = Arc::new(MockMortgageProvider::empty());
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        let quote = client.get_quote(&request(100_000, 10_000)).await.unwrap();

        assert_eq!(quote.decline_reason(), Some(DeclineReason::NoOffers));
        assert_eq!(
            quote.decline_reason().unwrap().to_string(),
            "No quotes returned from third party"
        );
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn transport_fault_propagates_as_error() {
        let provider = Arc::new(MockMortgageProvider::failing(ProviderError::timeout(
            "provider unreachable",
        )));
        let client = MortgageClient::new(Arc::clone(&provider) as Arc<dyn MortgageProvider>);

        let result = client.get_quote(&request(100_000, 10_000)).await;

        assert!(result.is_err());
    }
}
