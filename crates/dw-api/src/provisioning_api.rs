use crate::Result;
use crate::models::RemoteUser;

use dw_core::IdentityAttributes;

use async_trait::async_trait;

/// Backend user records, created lazily the first time an identity is seen.
#[async_trait]
pub trait ProvisioningApi: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<Option<RemoteUser>>;

    /// Returns the backend-issued user id
    async fn create_user(&self, attributes: &IdentityAttributes) -> Result<String>;
}
