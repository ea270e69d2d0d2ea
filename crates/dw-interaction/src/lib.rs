//! View-state machines behind the balance and transfer screens.
//!
//! Nothing here renders; every type exposes the state a view needs and the spring
//! parameters it should animate with.

mod amount_entry;
mod balance_counter;
mod carousel;
mod expansion;
mod keypad;
mod keypad_visibility;
mod layout;
mod spring;

pub use amount_entry::{AmountEntry, AmountState, InsufficientBalanceFeedback, KeystrokeOutcome};
pub use balance_counter::{BalanceCounter, DEFAULT_FRAME_INTERVAL};
pub use carousel::{BalanceCarousel, SwipeOutcome, SwipeThresholds};
pub use expansion::{ExpansionMachine, ExpansionState, ExpansionTransition};
pub use keypad::{AmountInput, Key, MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS};
pub use keypad_visibility::{KeypadVisibility, KeypadVisibilityMachine};
pub use layout::{DEFAULT_COLLAPSED_HEIGHT, HeightLayout, MIN_STEP, Viewport};
pub use spring::SpringCurve;

#[cfg(test)]
mod tests;
