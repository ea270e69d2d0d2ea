use crate::{AmountInput, Key};

use dw_core::{Balance, Currency, RateTable};

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountState {
    Empty,
    Zero,
    /// `0 < source amount ≤ available balance`
    Valid,
    ExceedsBalance,
    /// No rate between the destination and source currencies
    RateUnavailable,
}

/// One-shot cue played when a keystroke leaves the amount above the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientBalanceFeedback {
    pub haptic: bool,
    pub shake: bool,
}

impl InsufficientBalanceFeedback {
    const BOTH: Self = Self {
        haptic: true,
        shake: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeystrokeOutcome {
    pub accepted: bool,
    pub state: AmountState,
    pub feedback: Option<InsufficientBalanceFeedback>,
}

/// Amount typed in the destination currency, paid from a selectable source balance.
///
/// `source = destination × rate(destination → source)`. Every keystroke re-validates
/// against the source balance.
pub struct AmountEntry {
    input: AmountInput,
    destination: Currency,
    source: Currency,
    balances: Vec<Balance>,
    rates: RateTable,
}

impl AmountEntry {
    pub fn new(
        destination: Currency,
        source: Currency,
        balances: &[Balance],
        rates: RateTable,
    ) -> Self {
        Self {
            input: AmountInput::new(),
            destination,
            source,
            balances: balances.to_vec(),
            rates,
        }
    }

    pub fn input(&self) -> &AmountInput {
        &self.input
    }

    pub fn destination(&self) -> Currency {
        self.destination
    }

    pub fn source(&self) -> Currency {
        self.source
    }

    pub fn press(&mut self, key: Key) -> KeystrokeOutcome {
        let accepted = self.input.press(key);
        let state = self.state();
        let feedback = (accepted && key != Key::Backspace && state == AmountState::ExceedsBalance)
            .then_some(InsufficientBalanceFeedback::BOTH);

        KeystrokeOutcome {
            accepted,
            state,
            feedback,
        }
    }

    /// Switch the paying balance. The typed amount is kept.
    pub fn select_source(&mut self, currency: Currency) -> AmountState {
        self.source = currency;
        self.state()
    }

    pub fn set_balances(&mut self, balances: &[Balance]) -> AmountState {
        self.balances = balances.to_vec();
        self.state()
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn destination_amount(&self) -> Option<Decimal> {
        self.input.value()
    }

    pub fn rate(&self) -> Option<Decimal> {
        self.rates.rate(self.destination, self.source)
    }

    pub fn source_amount(&self) -> Option<Decimal> {
        Some(self.destination_amount()? * self.rate()?)
    }

    /// Balance of the source currency; zero when the user holds none.
    pub fn available(&self) -> Decimal {
        self.balances
            .iter()
            .find(|b| b.currency == self.source)
            .map_or(Decimal::ZERO, |b| b.amount)
    }

    pub fn state(&self) -> AmountState {
        let Some(destination) = self.destination_amount() else {
            return AmountState::Empty;
        };
        if destination.is_zero() {
            return AmountState::Zero;
        }
        let Some(rate) = self.rate() else {
            return AmountState::RateUnavailable;
        };
        if destination * rate > self.available() {
            AmountState::ExceedsBalance
        } else {
            AmountState::Valid
        }
    }

    pub fn can_continue(&self) -> bool {
        self.state() == AmountState::Valid
    }
}
