use crate::{InFlight, Outcome, Provisioner, ScreenLifetime};

use dw_api::{BalanceApi, MovementsApi};
use dw_core::{Balance, CachedUser, DomainEvent, EventSink, Movement};

use std::sync::Arc;

pub const LOAD_HOME: &str = "load_home";
pub const REFRESH_BALANCES: &str = "refresh_balances";
pub const DEFAULT_MOVEMENT_PAGE: u32 = 20;

/// Everything the home screen renders
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSnapshot {
    /// `None` when the profile could not be resolved
    pub profile: Option<CachedUser>,
    /// Never empty: a single placeholder stands in for a failed fetch
    pub balances: Vec<Balance>,
    pub movements: Vec<Movement>,
}

impl HomeSnapshot {
    fn placeholder(profile: Option<CachedUser>) -> Self {
        Self {
            profile,
            balances: vec![Balance::placeholder()],
            movements: Vec::new(),
        }
    }
}

pub struct HomeLoader {
    provisioner: Arc<Provisioner>,
    balances: Arc<dyn BalanceApi>,
    movements: Arc<dyn MovementsApi>,
    in_flight: InFlight,
    sink: Arc<dyn EventSink>,
    movement_page: u32,
}

impl HomeLoader {
    pub fn new(
        provisioner: Arc<Provisioner>,
        balances: Arc<dyn BalanceApi>,
        movements: Arc<dyn MovementsApi>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            provisioner,
            balances,
            movements,
            in_flight: InFlight::new(Arc::clone(&sink)),
            sink,
            movement_page: DEFAULT_MOVEMENT_PAGE,
        }
    }

    pub fn with_movement_page(mut self, page: u32) -> Self {
        self.movement_page = page.max(1);
        self
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Resolve the profile, then fetch balances and movements in parallel.
    ///
    /// Balances and movements are only requested once the profile has a backend id.
    pub async fn load(&self, lifetime: &ScreenLifetime) -> Outcome<HomeSnapshot> {
        let Some(_token) = self.in_flight.try_begin(LOAD_HOME) else {
            return Outcome::Skipped;
        };
        lifetime.run(self.load_snapshot()).await
    }

    async fn load_snapshot(&self) -> HomeSnapshot {
        let profile = match self.provisioner.resolve_profile().await {
            Ok(profile) => profile,
            Err(e) => {
                self.degraded("resolve_profile", e.to_string());
                return HomeSnapshot::placeholder(None);
            }
        };

        let user_id = profile.cache_key().to_string();
        let (balances, movements) = tokio::join!(
            self.fetch_balances(&user_id),
            self.fetch_movements(&user_id)
        );

        HomeSnapshot {
            profile: Some(profile),
            balances,
            movements,
        }
    }

    /// Re-fetch balances only, e.g. after a transfer.
    pub async fn refresh_balances(
        &self,
        lifetime: &ScreenLifetime,
        user_id: &str,
    ) -> Outcome<Vec<Balance>> {
        let Some(_token) = self.in_flight.try_begin(REFRESH_BALANCES) else {
            return Outcome::Skipped;
        };
        lifetime.run(self.fetch_balances(user_id)).await
    }

    async fn fetch_balances(&self, user_id: &str) -> Vec<Balance> {
        match self.balances.get_balances(user_id).await {
            Ok(raw) => Balance::normalize(&raw),
            Err(e) => {
                self.degraded("get_balances", e.to_string());
                vec![Balance::placeholder()]
            }
        }
    }

    async fn fetch_movements(&self, user_id: &str) -> Vec<Movement> {
        match self
            .movements
            .get_movements(user_id, self.movement_page, 0)
            .await
        {
            Ok(movements) => movements,
            Err(e) => {
                self.degraded("get_movements", e.to_string());
                Vec::new()
            }
        }
    }

    fn degraded(&self, operation: &'static str, reason: String) {
        self.sink.emit(DomainEvent::Degraded { operation, reason });
    }
}
