use crate::{CoreError, CoreResult, Currency};

use std::collections::HashMap;
use std::panic::Location;

use error_location::ErrorLocation;
use rust_decimal::Decimal;

const DEFAULT_UYU_PER_USD: i64 = 40;

/// Conversion rates between wallet currencies.
///
/// Injected into amount entry; in production the table is refreshed from the backend.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Static lookup used when no backend quote is available
    pub fn fixed() -> Self {
        Self::new()
            .with_pair(Currency::Usd, Currency::Uyu, Decimal::from(DEFAULT_UYU_PER_USD))
            .with_pair(Currency::Usdc, Currency::Uyu, Decimal::from(DEFAULT_UYU_PER_USD))
            .with_pair(Currency::Usdc, Currency::Usd, Decimal::ONE)
    }

    /// Register `base -> quote = rate` and its inverse. Non-positive rates are ignored.
    pub fn with_pair(mut self, base: Currency, quote: Currency, rate: Decimal) -> Self {
        if rate > Decimal::ZERO && base != quote {
            self.rates.insert((base, quote), rate);
            self.rates.insert((quote, base), Decimal::ONE / rate);
        }
        self
    }

    /// Rate to multiply an amount in `from` by to express it in `to`.
    pub fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        self.rates.get(&(from, to)).copied()
    }

    #[track_caller]
    pub fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> CoreResult<Decimal> {
        let rate = self.rate(from, to).ok_or_else(|| CoreError::MissingRate {
            from: from.to_string(),
            to: to.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(amount * rate)
    }
}
