//! Orchestration of the wallet's screen-level flows.
//!
//! Every user-triggered operation returns an [`ActionResult`](dw_core::ActionResult)
//! or an [`Outcome`]; nothing here hands a raw error to the view layer.

pub mod auth;
pub mod contacts;
pub mod debounce;
pub mod diagnostics;
pub mod error;
pub mod home;
pub mod in_flight;
pub mod lifetime;
pub mod logger;
pub mod provisioner;
pub mod transfer;

pub use auth::AuthService;
pub use contacts::{ContactBook, ContactResolver, phone_query, recurrent_contacts};
pub use debounce::Debouncer;
pub use diagnostics::{CacheStats, Diagnostics, DiagnosticsReport};
pub use error::{AppError, Result};
pub use home::{HomeLoader, HomeSnapshot};
pub use in_flight::{InFlight, InFlightToken};
pub use lifetime::{LifetimeGuard, Outcome, ScreenLifetime};
pub use provisioner::Provisioner;
pub use transfer::TransferService;

#[cfg(test)]
mod tests;
