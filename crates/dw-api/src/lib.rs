mod balance_api;
mod client;
mod contacts_api;
mod error;
mod identity_provider;
mod models;
mod movements_api;
mod provisioning_api;
mod session_store;
mod transfer_api;

pub use balance_api::BalanceApi;
pub use client::connectivity::{ConnectivityChecker, ConnectivityStatus};
pub use client::http_client::HttpClient;
pub use contacts_api::ContactsApi;
pub use error::{ApiError, Result};
pub use identity_provider::IdentityProvider;
pub use models::{
    AddContactRequest, ContactSearchResult, DirectoryUser, RemoteUser, SessionTokens,
    SignUpOutcome,
};
pub use movements_api::MovementsApi;
pub use provisioning_api::ProvisioningApi;
pub use session_store::{InMemorySessionStore, SessionStore};
pub use transfer_api::TransferApi;
