//! # Quote Clients
//!
//! Per-product quote capabilities and their implementations.
//!
//! This module defines the [`MortgageQuoteClient`] and
//! [`HomeInsuranceQuoteClient`] traits the orchestrator is constructed
//! against, so either leg can be substituted or mocked, together with the
//! provider-backed implementations in [`mortgage`] and [`home_insurance`].
//!
//! Both implementations share the same reduction over provider offers:
//! select the minimum monthly payment, keeping the first offer in provider
//! order among equal minimums.

use crate::application::error::QuoteServiceResult;
use crate::domain::quote::Quote;
use crate::domain::request::QuoteRequest;
use crate::infrastructure::providers::traits::ProviderOffer;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt;

pub mod home_insurance;
pub mod mortgage;

pub use home_insurance::HomeInsuranceClient;
pub use mortgage::MortgageClient;

/// Capability for producing a mortgage quote from an applicant request.
///
/// Implementations own the mortgage eligibility rules, the translation to
/// the provider's request shape, and the cheapest-offer reduction. Every
/// business-rule outcome is returned inside the [`Quote`]; the `Err` branch
/// is reserved for transport and task faults.
#[async_trait]
pub trait MortgageQuoteClient: Send + Sync + fmt::Debug {
    /// Computes the mortgage quote for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error only for provider transport faults or internal
    /// computation faults, never for an ineligible applicant.
    async fn get_quote(&self, request: &QuoteRequest) -> QuoteServiceResult<Quote>;
}

/// Capability for producing a home-insurance quote from an applicant
/// request.
#[async_trait]
pub trait HomeInsuranceQuoteClient: Send + Sync + fmt::Debug {
    /// Computes the home-insurance quote for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error only for provider transport faults or internal
    /// computation faults, never for an ineligible applicant.
    async fn get_quote(&self, request: &QuoteRequest) -> QuoteServiceResult<Quote>;
}

/// Ceiling on the house value either product will quote for.
pub(crate) fn house_value_ceiling() -> Decimal {
    Decimal::from(10_000_000_u64)
}

/// Selects the offer with the lowest monthly payment.
///
/// Provider order is unspecified, so the minimum is selected explicitly.
/// Equal minimums keep the first offer in provider order; `Iterator::min_by`
/// would keep the last, so the scan is written out.
pub(crate) fn cheapest_offer(offers: &[ProviderOffer]) -> Option<&ProviderOffer> {
    let mut cheapest: Option<&ProviderOffer> = None;
    for offer in offers {
        match cheapest {
            Some(current) if offer.monthly_payment < current.monthly_payment => {
                cheapest = Some(offer);
            }
            None => cheapest = Some(offer),
            Some(_) => {}
        }
    }
    cheapest
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn offers(payments: &[i64]) -> Vec<ProviderOffer> {
        payments
            .iter()
            .map(|p| ProviderOffer {
                monthly_payment: Decimal::new(*p, 0),
            })
            .collect()
    }

    #[test]
    fn empty_list_has_no_cheapest() {
        assert!(cheapest_offer(&[]).is_none());
    }

    #[test]
    fn picks_minimum_regardless_of_order() {
        let ascending = offers(&[299, 300]);
        let descending = offers(&[300, 299]);
        assert_eq!(
            cheapest_offer(&ascending).unwrap().monthly_payment,
            Decimal::new(299, 0)
        );
        assert_eq!(
            cheapest_offer(&descending).unwrap().monthly_payment,
            Decimal::new(299, 0)
        );
    }

    #[test]
    fn equal_minimums_keep_provider_order() {
        let list = offers(&[300, 299, 299]);
        let cheapest = cheapest_offer(&list).unwrap();
        assert!(std::ptr::eq(cheapest, &list[1]));
    }

    proptest! {
        #[test]
        fn result_is_the_first_minimum(payments in proptest::collection::vec(0i64..1_000_000, 1..32)) {
            let list = offers(&payments);
            let cheapest = cheapest_offer(&list).unwrap();
            let min = payments.iter().min().copied().unwrap();
            prop_assert_eq!(cheapest.monthly_payment, Decimal::new(min, 0));

            let first_min_index = payments.iter().position(|p| *p == min).unwrap();
            prop_assert!(std::ptr::eq(cheapest, &list[first_min_index]));
        }
    }
}
