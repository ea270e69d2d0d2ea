pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::cache_store::CacheStore;
pub use error::{DbError, Result};
pub use repositories::contact_repository::ContactRepository;
pub use repositories::message_repository::MessageRepository;
pub use repositories::user_repository::UserRepository;
