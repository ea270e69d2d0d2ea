use crate::error::Result as AppErrorResult;

use dw_api::{IdentityProvider, ProvisioningApi};
use dw_core::{CachedUser, DomainEvent, EventSink, IdentityAttributes};
use dw_db::CacheStore;

use std::sync::Arc;

/// Resolves the signed-in profile and provisions its backend record on first sight.
///
/// This is the only place that moves a profile from its local identifier to the
/// backend-issued one.
pub struct Provisioner {
    identity: Arc<dyn IdentityProvider>,
    provisioning: Arc<dyn ProvisioningApi>,
    store: CacheStore,
    sink: Arc<dyn EventSink>,
}

impl Provisioner {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        provisioning: Arc<dyn ProvisioningApi>,
        store: CacheStore,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            identity,
            provisioning,
            store,
            sink,
        }
    }

    /// Profile with a backend id, creating the backend record when needed.
    ///
    /// Cache failures are logged and the profile is resolved without the cache.
    /// Identity and provisioning failures are returned.
    pub async fn resolve_profile(&self) -> AppErrorResult<CachedUser> {
        let attributes = self.identity.user_attributes().await?;
        let cached = self.cached_profile(&attributes).await;

        if cached.is_registered() {
            return Ok(cached);
        }

        let remote_id = match self.provisioning.get_user(&attributes.sub).await? {
            Some(remote) => remote.id,
            None => {
                let id = self.provisioning.create_user(&attributes).await?;
                log::info!("Provisioned backend user {id} for {}", attributes.sub);
                id
            }
        };

        Ok(self.rekey(cached, &remote_id).await)
    }

    async fn cached_profile(&self, attributes: &IdentityAttributes) -> CachedUser {
        let users = self.store.users();

        match users.find_latest().await {
            Ok(Some(user)) if user.email == attributes.email => return user,
            Ok(Some(user)) => {
                log::info!(
                    "Cached profile {} belongs to another identity, starting fresh",
                    user.cache_key()
                );
            }
            Ok(None) => {}
            Err(e) => {
                self.degraded("load_profile", e.to_string());
                return CachedUser::from_identity(attributes);
            }
        }

        let user = CachedUser::from_identity(attributes);
        if let Err(e) = users.create(&user).await {
            self.degraded("create_profile", e.to_string());
        }
        user
    }

    async fn rekey(&self, mut user: CachedUser, remote_id: &str) -> CachedUser {
        match self.store.users().rekey(user.cache_key(), remote_id).await {
            Ok(rekeyed) => rekeyed,
            Err(e) => {
                self.degraded("rekey_profile", e.to_string());
                user.remote_id = Some(remote_id.to_string());
                user
            }
        }
    }

    fn degraded(&self, operation: &'static str, reason: String) {
        self.sink.emit(DomainEvent::Degraded { operation, reason });
    }
}
