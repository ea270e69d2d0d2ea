pub mod action_id;
pub mod action_result;
pub mod balance;
pub mod cached_user;
pub mod currency;
pub mod identity_attributes;
pub mod message;
pub mod movement;
pub mod onboarding_status;
pub mod transfer;
pub mod user_contact;
