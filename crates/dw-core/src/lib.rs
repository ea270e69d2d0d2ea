pub mod error;
pub mod events;
pub mod models;
pub mod rate_table;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use events::{
    DomainEvent, EventSink, FanOutEventSink, LogEventSink, MemoryEventSink, RecordedEvent,
    SwipeDirection,
};
pub use models::action_id::ActionId;
pub use models::action_result::ActionResult;
pub use models::balance::{Balance, RawBalance};
pub use models::cached_user::CachedUser;
pub use models::currency::Currency;
pub use models::identity_attributes::IdentityAttributes;
pub use models::message::{Message, MessageRole};
pub use models::movement::{Movement, MovementDirection};
pub use models::onboarding_status::OnboardingStatus;
pub use models::transfer::{DepositRequest, TransferReceipt, TransferRequest};
pub use models::user_contact::UserContact;
pub use rate_table::RateTable;

#[cfg(test)]
mod tests;
