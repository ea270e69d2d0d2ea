use dw_api::{IdentityProvider, SessionStore, SessionTokens, SignUpOutcome};
use dw_core::{ActionResult, IdentityAttributes};
use dw_db::CacheStore;

use std::sync::Arc;

/// Sign-up, sign-in and sign-out against the identity provider.
pub struct AuthService {
    identity: Arc<dyn IdentityProvider>,
    sessions: Arc<dyn SessionStore>,
    store: CacheStore,
}

impl AuthService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        sessions: Arc<dyn SessionStore>,
        store: CacheStore,
    ) -> Self {
        Self {
            identity,
            sessions,
            store,
        }
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        attributes: &IdentityAttributes,
    ) -> ActionResult<SignUpOutcome> {
        match self.identity.sign_up(email, password, attributes).await {
            Ok(outcome) => ActionResult::ok(outcome),
            Err(e) => failure("sign_up", e),
        }
    }

    pub async fn confirm_sign_up(&self, email: &str, code: &str) -> ActionResult<()> {
        match self.identity.confirm_sign_up(email, code).await {
            Ok(()) => ActionResult::ok_with_message((), "Account confirmed"),
            Err(e) => failure("confirm_sign_up", e),
        }
    }

    pub async fn resend_code(&self, email: &str) -> ActionResult<()> {
        match self.identity.resend_code(email).await {
            Ok(()) => ActionResult::ok_with_message((), "Code sent"),
            Err(e) => failure("resend_code", e),
        }
    }

    /// Sign in and persist the issued tokens for the REST client.
    pub async fn sign_in(&self, email: &str, password: &str) -> ActionResult<()> {
        let tokens = match self.identity.sign_in(email, password).await {
            Ok(tokens) => tokens,
            Err(e) => return failure("sign_in", e),
        };
        match self.sessions.save(&tokens).await {
            Ok(()) => ActionResult::ok(()),
            Err(e) => failure("save_session", e),
        }
    }

    pub async fn forgot_password(&self, email: &str) -> ActionResult<()> {
        match self.identity.forgot_password(email).await {
            Ok(()) => ActionResult::ok_with_message((), "Check your email for a code"),
            Err(e) => failure("forgot_password", e),
        }
    }

    pub async fn confirm_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> ActionResult<()> {
        match self.identity.confirm_password(email, code, new_password).await {
            Ok(()) => ActionResult::ok_with_message((), "Password updated"),
            Err(e) => failure("confirm_password", e),
        }
    }

    /// Current tokens, if the provider still has a session.
    pub async fn current_session(&self) -> Option<SessionTokens> {
        match self.identity.current_session().await {
            Ok(session) => session,
            Err(e) => {
                log::warn!("current_session failed: {e}");
                None
            }
        }
    }

    /// End the session and wipe every locally cached row.
    ///
    /// Local cleanup runs even when the provider call fails.
    pub async fn sign_out(&self) -> ActionResult<()> {
        let remote = self.identity.sign_out().await;

        if let Err(e) = self.sessions.clear().await {
            log::warn!("Failed to clear session tokens: {e}");
        }
        if let Err(e) = self.store.clear_all_data().await {
            log::error!("Failed to wipe local cache on sign-out: {e}");
            return ActionResult::failure("Could not remove local data");
        }

        match remote {
            Ok(()) => ActionResult::ok(()),
            Err(e) => {
                log::warn!("Identity provider sign-out failed: {e}");
                ActionResult::ok_with_message((), "Signed out on this device")
            }
        }
    }
}

fn failure<T>(operation: &str, error: dw_api::ApiError) -> ActionResult<T> {
    log::warn!("{operation} failed: {error}");
    ActionResult::failure(error.user_message())
}
