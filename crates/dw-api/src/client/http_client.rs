use crate::models::{
    AddContactRequest, ContactSearchResult, CreatedUser, DirectoryUser, RemoteUser,
};
use crate::{
    ApiError, BalanceApi, ContactsApi, MovementsApi, ProvisioningApi, Result, SessionStore,
    TransferApi,
};

use dw_config::ApiConfig;
use dw_core::{
    Currency, DepositRequest, IdentityAttributes, Movement, RawBalance, TransferReceipt,
    TransferRequest, UserContact,
};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// REST client for the wallet backend.
///
/// Attaches `Authorization: Bearer <access token>` whenever the session store holds
/// tokens. Error bodies of the form `{"error": {"code", "message"}}` become
/// [`ApiError::Api`].
pub struct HttpClient {
    base_url: Url,
    client: ReqwestClient,
    sessions: Arc<dyn SessionStore>,
}

impl HttpClient {
    /// * `base_url` - Backend URL (e.g., "https://api.example.com/v1")
    /// * `timeout` - Whole-request timeout applied to every call
    pub fn new(base_url: &str, timeout: Duration, sessions: Arc<dyn SessionStore>) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let base_url =
            Url::parse(trimmed).map_err(|e| ApiError::url(format!("{trimmed}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::url(format!("{trimmed} cannot be used as a base URL")));
        }

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            sessions,
        })
    }

    pub fn from_config(config: &ApiConfig, sessions: Arc<dyn SessionStore>) -> Result<Self> {
        Self::new(&config.base_url, config.request_timeout(), sessions)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus percent-encoded path segments and query pairs.
    pub(crate) fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::url("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    async fn request(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let mut req = self.client.request(method, url);

        if let Some(tokens) = self.sessions.load().await? {
            req = req.bearer_auth(tokens.access_token);
        }

        Ok(req)
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .or(status.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ApiError::api_error(status.as_u16(), code, message));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let req = self.request(Method::GET, url).await?;
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// GET that maps 404 to `None`
    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        match self.get_json(url).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, url).await?.json(body);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait]
impl BalanceApi for HttpClient {
    async fn get_balances(&self, user_id: &str) -> Result<Vec<RawBalance>> {
        let url = self.url(&["users", user_id, "balances"], &[])?;
        self.get_json(url).await
    }

    async fn deposit(&self, user_id: &str, request: &DepositRequest) -> Result<()> {
        let url = self.url(&["users", user_id, "deposits"], &[])?;
        let req = self.request(Method::POST, url).await?.json(request);
        self.execute(req).await?;
        Ok(())
    }
}

#[async_trait]
impl TransferApi for HttpClient {
    async fn transfer(&self, user_id: &str, request: &TransferRequest) -> Result<TransferReceipt> {
        let url = self.url(&["users", user_id, "transfers"], &[])?;
        self.post_json(url, request).await
    }
}

#[async_trait]
impl MovementsApi for HttpClient {
    async fn get_movements(&self, user_id: &str, limit: u32, offset: u32) -> Result<Vec<Movement>> {
        let url = self.url(
            &["users", user_id, "movements"],
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )?;
        self.get_json(url).await
    }
}

#[async_trait]
impl ContactsApi for HttpClient {
    async fn recent(&self, currency: Currency, limit: u32) -> Result<Vec<UserContact>> {
        let url = self.url(
            &["contacts", "recent"],
            &[
                ("currency", currency.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
        )?;
        self.get_json(url).await
    }

    async fn all(&self, currency: Currency) -> Result<Vec<UserContact>> {
        let url = self.url(&["contacts"], &[("currency", currency.as_str().to_string())])?;
        self.get_json(url).await
    }

    async fn search(
        &self,
        query: &str,
        currency: Currency,
        limit: u32,
    ) -> Result<ContactSearchResult> {
        let url = self.url(
            &["contacts", "search"],
            &[
                ("query", query.to_string()),
                ("currency", currency.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
        )?;
        self.get_json(url).await
    }

    async fn add_contact(&self, request: &AddContactRequest) -> Result<UserContact> {
        let url = self.url(&["contacts"], &[])?;
        self.post_json(url, request).await
    }

    async fn lookup_phone(&self, phone: &str) -> Result<Option<DirectoryUser>> {
        let url = self.url(&["directory", "phone", phone], &[])?;
        self.get_optional(url).await
    }
}

#[async_trait]
impl ProvisioningApi for HttpClient {
    async fn get_user(&self, user_id: &str) -> Result<Option<RemoteUser>> {
        let url = self.url(&["users", user_id], &[])?;
        self.get_optional(url).await
    }

    async fn create_user(&self, attributes: &IdentityAttributes) -> Result<String> {
        let url = self.url(&["users"], &[])?;
        let created: CreatedUser = self.post_json(url, attributes).await?;
        Ok(created.id)
    }
}
