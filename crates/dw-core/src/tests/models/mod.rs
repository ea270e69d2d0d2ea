mod balance;
mod currency;
mod onboarding_status;
mod transfer;
mod user_contact;
