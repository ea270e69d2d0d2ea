//! Scripted collaborators. Each mock records the calls it receives in order.

use dw_api::{
    AddContactRequest, ApiError, BalanceApi, ContactSearchResult, ContactsApi, DirectoryUser,
    IdentityProvider, MovementsApi, ProvisioningApi, RemoteUser, Result, SessionTokens,
    SignUpOutcome, TransferApi,
};
use dw_core::{
    Currency, DepositRequest, IdentityAttributes, Movement, RawBalance, TransferReceipt,
    TransferRequest, UserContact,
};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub fn unavailable() -> ApiError {
    ApiError::api_error(503, "unavailable", "Service unavailable")
}

/// Shared, ordered call log so tests can check sequencing across mocks
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

// ============================================================
// Balances, movements, transfers
// ============================================================

#[derive(Default)]
pub struct MockBank {
    pub log: CallLog,
    pub balances: Vec<RawBalance>,
    pub movements: Vec<Movement>,
    pub fail_balances: bool,
    pub fail_movements: bool,
    pub fail_transfer: Option<(u16, String)>,
    pub delay: Duration,
    pub transfers: Mutex<Vec<TransferRequest>>,
    pub deposits: Mutex<Vec<DepositRequest>>,
}

impl MockBank {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl BalanceApi for MockBank {
    async fn get_balances(&self, user_id: &str) -> Result<Vec<RawBalance>> {
        self.log.record(format!("get_balances:{user_id}"));
        self.pause().await;
        if self.fail_balances {
            return Err(unavailable());
        }
        Ok(self.balances.clone())
    }

    async fn deposit(&self, user_id: &str, request: &DepositRequest) -> Result<()> {
        self.log.record(format!("deposit:{user_id}"));
        self.deposits.lock().unwrap().push(request.clone());
        Ok(())
    }
}

#[async_trait]
impl MovementsApi for MockBank {
    async fn get_movements(&self, user_id: &str, limit: u32, offset: u32) -> Result<Vec<Movement>> {
        self.log
            .record(format!("get_movements:{user_id}:{limit}:{offset}"));
        self.pause().await;
        if self.fail_movements {
            return Err(unavailable());
        }
        Ok(self.movements.clone())
    }
}

#[async_trait]
impl TransferApi for MockBank {
    async fn transfer(&self, user_id: &str, request: &TransferRequest) -> Result<TransferReceipt> {
        self.log.record(format!("transfer:{user_id}"));
        if let Some((status, message)) = &self.fail_transfer {
            return Err(ApiError::api_error(*status, "rejected", message.clone()));
        }
        self.transfers.lock().unwrap().push(request.clone());
        Ok(TransferReceipt {
            id: "trf_001".to_string(),
            status: "pending".to_string(),
        })
    }
}

// ============================================================
// Identity and provisioning
// ============================================================

pub struct MockIdentity {
    pub log: CallLog,
    pub attributes: IdentityAttributes,
    pub fail_attributes: bool,
    pub reject_sign_in: bool,
    pub fail_sign_out: bool,
}

impl MockIdentity {
    pub fn new(log: CallLog, attributes: IdentityAttributes) -> Self {
        Self {
            log,
            attributes,
            fail_attributes: false,
            reject_sign_in: false,
            fail_sign_out: false,
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        _attributes: &IdentityAttributes,
    ) -> Result<SignUpOutcome> {
        self.log.record(format!("sign_up:{email}"));
        Ok(SignUpOutcome {
            user_sub: self.attributes.sub.clone(),
            confirmation_required: true,
        })
    }

    async fn confirm_sign_up(&self, email: &str, _code: &str) -> Result<()> {
        self.log.record(format!("confirm_sign_up:{email}"));
        Ok(())
    }

    async fn resend_code(&self, email: &str) -> Result<()> {
        self.log.record(format!("resend_code:{email}"));
        Ok(())
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<SessionTokens> {
        self.log.record(format!("sign_in:{email}"));
        if self.reject_sign_in {
            return Err(ApiError::identity("Incorrect username or password."));
        }
        Ok(SessionTokens::new("access-123"))
    }

    async fn forgot_password(&self, email: &str) -> Result<()> {
        self.log.record(format!("forgot_password:{email}"));
        Ok(())
    }

    async fn confirm_password(&self, email: &str, _code: &str, _new_password: &str) -> Result<()> {
        self.log.record(format!("confirm_password:{email}"));
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<SessionTokens>> {
        self.log.record("current_session");
        Ok(None)
    }

    async fn user_attributes(&self) -> Result<IdentityAttributes> {
        self.log.record("user_attributes");
        if self.fail_attributes {
            return Err(ApiError::unauthenticated());
        }
        Ok(self.attributes.clone())
    }

    async fn sign_out(&self) -> Result<()> {
        self.log.record("sign_out");
        if self.fail_sign_out {
            return Err(unavailable());
        }
        Ok(())
    }
}

pub struct MockProvisioning {
    pub log: CallLog,
    /// Backend record returned by `get_user`
    pub existing: Option<RemoteUser>,
    /// Id handed out by `create_user`
    pub created_id: String,
    pub fail: bool,
}

impl MockProvisioning {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            existing: None,
            created_id: "usr_2k9RemoteA1".to_string(),
            fail: false,
        }
    }
}

#[async_trait]
impl ProvisioningApi for MockProvisioning {
    async fn get_user(&self, user_id: &str) -> Result<Option<RemoteUser>> {
        self.log.record(format!("get_user:{user_id}"));
        if self.fail {
            return Err(unavailable());
        }
        Ok(self.existing.clone())
    }

    async fn create_user(&self, attributes: &IdentityAttributes) -> Result<String> {
        self.log.record(format!("create_user:{}", attributes.sub));
        Ok(self.created_id.clone())
    }
}

// ============================================================
// Contacts
// ============================================================

#[derive(Default)]
pub struct MockContacts {
    pub log: CallLog,
    pub all: Vec<UserContact>,
    pub search: ContactSearchResult,
    pub phone_match: Option<DirectoryUser>,
    /// Latency applied to `search` and `lookup_phone`
    pub delay: Duration,
    pub fail_all: bool,
    pub fail_search: bool,
    pub fail_lookup: bool,
    pub fail_add: bool,
}

#[async_trait]
impl ContactsApi for MockContacts {
    async fn recent(&self, currency: Currency, limit: u32) -> Result<Vec<UserContact>> {
        self.log.record(format!("recent:{currency}:{limit}"));
        Ok(self.all.iter().take(limit as usize).cloned().collect())
    }

    async fn all(&self, currency: Currency) -> Result<Vec<UserContact>> {
        self.log.record(format!("all:{currency}"));
        if self.fail_all {
            return Err(unavailable());
        }
        Ok(self.all.clone())
    }

    async fn search(
        &self,
        query: &str,
        currency: Currency,
        limit: u32,
    ) -> Result<ContactSearchResult> {
        self.log.record(format!("search:{query}:{currency}:{limit}"));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail_search {
            return Err(unavailable());
        }
        Ok(self.search.clone())
    }

    async fn add_contact(&self, request: &AddContactRequest) -> Result<UserContact> {
        self.log.record("add_contact");
        if self.fail_add {
            return Err(ApiError::api_error(409, "duplicate", "Contact already exists"));
        }
        let mut contact = UserContact::new("Saved Contact");
        contact.contact_id = request.contact_id.clone();
        contact.cvu = request.cvu.clone();
        contact.alias = request.alias.clone();
        Ok(contact)
    }

    async fn lookup_phone(&self, phone: &str) -> Result<Option<DirectoryUser>> {
        self.log.record(format!("lookup_phone:{phone}"));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail_lookup {
            return Err(unavailable());
        }
        Ok(self.phone_match.clone())
    }
}
