use crate::Result;
use crate::models::{SessionTokens, SignUpOutcome};

use dw_core::IdentityAttributes;

use async_trait::async_trait;

/// Managed identity provider. Implementations persist issued tokens through a
/// [`SessionStore`](crate::SessionStore).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        attributes: &IdentityAttributes,
    ) -> Result<SignUpOutcome>;

    async fn confirm_sign_up(&self, email: &str, code: &str) -> Result<()>;

    async fn resend_code(&self, email: &str) -> Result<()>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens>;

    async fn forgot_password(&self, email: &str) -> Result<()>;

    async fn confirm_password(&self, email: &str, code: &str, new_password: &str) -> Result<()>;

    async fn current_session(&self) -> Result<Option<SessionTokens>>;

    async fn user_attributes(&self) -> Result<IdentityAttributes>;

    async fn sign_out(&self) -> Result<()>;
}
