//! # Home-Insurance Quote Client
//!
//! Provider-backed implementation of the home-insurance capability.
//!
//! The only eligibility gate is the house-value ceiling. The contents cover
//! sent to the provider is a policy constant supplied at construction, never
//! taken from the applicant request.
//!
//! # Examples
//!
//! ```ignore
//! use homequote::application::clients::HomeInsuranceClient;
//! use homequote::config::HomeInsuranceConfig;
//!
//! let client = HomeInsuranceClient::new(provider, HomeInsuranceConfig::default());
//! let quote = client.get_quote(&request).await?;
//! ```

use crate::application::clients::{
    HomeInsuranceQuoteClient, cheapest_offer, house_value_ceiling,
};
use crate::application::error::QuoteServiceResult;
use crate::config::HomeInsuranceConfig;
use crate::domain::quote::{DeclineReason, Product, Quote};
use crate::domain::request::QuoteRequest;
use crate::infrastructure::providers::traits::{
    HomeInsuranceProvider, HomeInsuranceProviderRequest,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Home-insurance quote client backed by a third-party provider.
#[derive(Debug, Clone)]
pub struct HomeInsuranceClient {
    provider: Arc<dyn HomeInsuranceProvider>,
    contents_value: Decimal,
}

impl HomeInsuranceClient {
    /// Creates a client over the given provider with the given policy
    /// settings.
    #[must_use]
    pub fn new(provider: Arc<dyn HomeInsuranceProvider>, config: HomeInsuranceConfig) -> Self {
        Self {
            provider,
            contents_value: config.contents_value(),
        }
    }

    /// Creates a client with the default policy settings.
    #[must_use]
    pub fn with_defaults(provider: Arc<dyn HomeInsuranceProvider>) -> Self {
        Self::new(provider, HomeInsuranceConfig::default())
    }

    /// Returns the contents cover included in every provider request.
    #[inline]
    #[must_use]
    pub fn contents_value(&self) -> Decimal {
        self.contents_value
    }

    fn house_value_is_eligible(request: &QuoteRequest) -> bool {
        request.house_value() <= house_value_ceiling()
    }
}

#[async_trait]
impl HomeInsuranceQuoteClient for HomeInsuranceClient {
    async fn get_quote(&self, request: &QuoteRequest) -> QuoteServiceResult<Quote> {
        if !Self::house_value_is_eligible(request) {
            tracing::debug!(%request, "home insurance declined: house value above ceiling");
            return Ok(Quote::declined(DeclineReason::HouseValueTooHigh(
                Product::HomeInsurance,
            )));
        }

        let offers = self
            .provider
            .get_quotes(&HomeInsuranceProviderRequest {
                house_value: request.house_value(),
                contents_value: self.contents_value,
            })
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
    struct MockInsuranceProvider {
        result: ProviderResult<Vec<ProviderOffer>>,
        requests: Mutex<Vec<HomeInsuranceProviderRequest>>,
    }

    impl MockInsuranceProvider {
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

        fn last_request(&self) -> HomeInsuranceProviderRequest {
            *self.requests.lock().unwrap().last().unwrap()
        }
    }

    #[async_trait]
    impl HomeInsuranceProvider for MockInsuranceProvider {
        async fn get_quotes(
            &self,
            request: &HomeInsuranceProviderRequest,
        ) -> ProviderResult<Vec<ProviderOffer>> {
            self.requests.lock().unwrap().push(*request);
            self.result.clone()
        }
    }

    fn request(house_value: i64) -> QuoteRequest {
        QuoteRequest::new(Decimal::new(house_value, 0), Decimal::ZERO)
    }

    #[tokio::test]
    async fn house_value_over_ceiling_declines_without_calling_provider() {
        let provider = Arc::new(MockInsuranceProvider::with_offers(&[30]));
        let client =
            HomeInsuranceClient::with_defaults(Arc::clone(&provider) as Arc<dyn HomeInsuranceProvider>);

        let quote = client.get_quote(&request(10_000_001)).await.unwrap();

        assert_eq!(
            quote.decline_reason(),
            Some(DeclineReason::HouseValueTooHigh(Product::HomeInsurance))
        );
        assert_eq!(
            quote.decline_reason().unwrap().to_string(),
            "Quotes cannot be provided for house worth over £10 million"
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn house_value_at_ceiling_is_eligible() {
        let provider = Arc::new(MockInsuranceProvider::with_offers(&[30]));
        let client =
            HomeInsuranceClient::with_defaults(Arc::clone(&provider) as Arc<dyn HomeInsuranceProvider>);

        let quote = client.get_quote(&request(10_000_000)).await.unwrap();

        assert_eq!(quote.monthly_payment(), Some(Decimal::new(30, 0)));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn provider_receives_house_value_and_default_contents_value() {
        let provider = Arc::new(MockInsuranceProvider::with_offers(&[30]));
        let client =
            HomeInsuranceClient::with_defaults(Arc::clone(&provider) as Arc<dyn HomeInsuranceProvider>);

        client.get_quote(&request(100_000)).await.unwrap();

        let sent = provider.last_request();
        assert_eq!(sent.house_value, Decimal::new(100_000, 0));
        assert_eq!(sent.contents_value, Decimal::new(50_000, 0));
    }

    #[tokio::test]
    async fn configured_contents_value_is_sent() {
        let provider = Arc::new(MockInsuranceProvider::with_offers(&[30]));
        let config =
            HomeInsuranceConfig::default().with_contents_value(Decimal::new(75_000, 0));
        let client = HomeInsuranceClient::new(
            Arc::clone(&provider) as Arc<dyn HomeInsuranceProvider>,
            config,
        );

        client.get_quote(&request(100_000)).await.unwrap();

        assert_eq!(
            provider.last_request().contents_value,
            Decimal::new(75_000, 0)
        );
    }

    #[tokio::test]
    async fn returns_cheapest_offer() {
        let provider = Arc::new(MockInsuranceProvider::with_offers(&[32, 30, 31]));
        let client =
            HomeInsuranceClient::with_defaults(Arc::clone(&provider) as Arc<dyn HomeInsuranceProvider>);

        let quote = client.get_quote(&request(100_000)).await.unwrap();

        assert_eq!(quote.monthly_payment(), Some(Decimal::new(30, 0)));
    }

    #[tokio::test]
    async fn empty_offer_list_declines_with_no_offers() {
        let provider = Arc::new(MockInsuranceProvider::empty());
        let client =
            HomeInsuranceClient::with_defaults(Arc::clone(&provider) as Arc<dyn HomeInsuranceProvider>);

        let quote = client.get_quote(&request(100_000)).await.unwrap();

        assert_eq!(quote.decline_reason(), Some(DeclineReason::NoOffers));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn transport_fault_propagates_as_error() {
        let provider = Arc::new(MockInsuranceProvider::failing(ProviderError::connection(
            "connection refused",
        )));
        let client =
            HomeInsuranceClient::with_defaults(Arc::clone(&provider) as Arc<dyn HomeInsuranceProvider>);

        let result = client.get_quote(&request(100_000)).await;

        assert!(result.is_err());
    }
}
