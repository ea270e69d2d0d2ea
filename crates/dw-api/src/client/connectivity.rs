//! Connectivity probe for the diagnostics screen.

use crate::{ApiError, Result};

use std::time::{Duration, Instant};

use reqwest::{Client as ReqwestClient, Url};

const HEALTH_PATH: &str = "health";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityStatus {
    /// Backend answered 2xx
    Reachable { latency_ms: u64 },
    /// Backend answered, but not with success
    Degraded { latency_ms: u64, status: u16 },
    /// No answer within the probe timeout
    TimedOut { timeout_ms: u64 },
    /// Connection failed outright
    Unreachable { error: String },
}

impl ConnectivityStatus {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }
}

/// Probes `GET {base}/health` with its own short timeout.
pub struct ConnectivityChecker {
    client: ReqwestClient,
    url: Url,
    timeout: Duration,
}

impl ConnectivityChecker {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let mut url =
            Url::parse(trimmed).map_err(|e| ApiError::url(format!("{trimmed}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::url(format!("{trimmed} cannot be used as a base URL")))?
            .pop_if_empty()
            .push(HEALTH_PATH);

        let client = ReqwestClient::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(1)
            .build()?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn check(&self) -> ConnectivityStatus {
        let start = Instant::now();
        let result = tokio::time::timeout(self.timeout, self.client.get(self.url.clone()).send()).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let status = match result {
            Err(_) => ConnectivityStatus::TimedOut {
                timeout_ms: self.timeout.as_millis() as u64,
            },
            Ok(Ok(resp)) if resp.status().is_success() => {
                ConnectivityStatus::Reachable { latency_ms }
            }
            Ok(Ok(resp)) => ConnectivityStatus::Degraded {
                latency_ms,
                status: resp.status().as_u16(),
            },
            Ok(Err(e)) if e.is_timeout() => ConnectivityStatus::TimedOut {
                timeout_ms: self.timeout.as_millis() as u64,
            },
            Ok(Err(e)) => ConnectivityStatus::Unreachable {
                error: e.to_string(),
            },
        };

        log::debug!("Connectivity check {} -> {:?}", self.url, status);
        status
    }
}
