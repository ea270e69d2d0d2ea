use crate::error::Result as AppErrorResult;

use dw_api::{ConnectivityChecker, ConnectivityStatus};
use dw_config::Config;
use dw_db::CacheStore;

use chrono::{DateTime, Utc};

/// Row counts of the local cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub users: i64,
    pub messages: i64,
    pub contacts: i64,
}

impl CacheStats {
    pub async fn collect(store: &CacheStore) -> AppErrorResult<Self> {
        Ok(Self {
            users: store.users().count().await?,
            messages: store.messages().count().await?,
            contacts: store.contacts().count().await?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.users == 0 && self.messages == 0 && self.contacts == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsReport {
    pub api_base_url: String,
    pub connectivity: ConnectivityStatus,
    /// `None` when the cache could not be read
    pub cache: Option<CacheStats>,
    pub checked_at: DateTime<Utc>,
}

impl DiagnosticsReport {
    pub fn is_healthy(&self) -> bool {
        self.connectivity.is_reachable() && self.cache.is_some()
    }
}

/// Backend reachability plus local cache health, for the diagnostics screen.
pub struct Diagnostics {
    checker: ConnectivityChecker,
    store: CacheStore,
}

impl Diagnostics {
    pub fn new(checker: ConnectivityChecker, store: CacheStore) -> Self {
        Self { checker, store }
    }

    pub fn from_config(config: &Config, store: CacheStore) -> AppErrorResult<Self> {
        let checker = ConnectivityChecker::new(
            &config.api.base_url,
            config.diagnostics.connectivity_timeout(),
        )?;
        Ok(Self::new(checker, store))
    }

    pub async fn run(&self) -> DiagnosticsReport {
        let (connectivity, cache) =
            tokio::join!(self.checker.check(), CacheStats::collect(&self.store));

        let cache = match cache {
            Ok(stats) => Some(stats),
            Err(e) => {
                log::warn!("Cache statistics unavailable: {e}");
                None
            }
        };

        log::info!("Diagnostics: connectivity={connectivity:?} cache={cache:?}");

        DiagnosticsReport {
            api_base_url: self.checker.url().to_string(),
            connectivity,
            cache,
            checked_at: Utc::now(),
        }
    }
}
