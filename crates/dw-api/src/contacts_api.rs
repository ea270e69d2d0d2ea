use crate::Result;
use crate::models::{AddContactRequest, ContactSearchResult, DirectoryUser};

use dw_core::{Currency, UserContact};

use async_trait::async_trait;

#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// Most recent transfer counterparts for `currency`
    async fn recent(&self, currency: Currency, limit: u32) -> Result<Vec<UserContact>>;

    /// Every contact usable with `currency`
    async fn all(&self, currency: Currency) -> Result<Vec<UserContact>>;

    async fn search(
        &self,
        query: &str,
        currency: Currency,
        limit: u32,
    ) -> Result<ContactSearchResult>;

    async fn add_contact(&self, request: &AddContactRequest) -> Result<UserContact>;

    /// Exact phone match in the user directory. `None` when nobody owns the number.
    async fn lookup_phone(&self, phone: &str) -> Result<Option<DirectoryUser>>;
}
