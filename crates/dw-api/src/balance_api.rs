use crate::Result;

use dw_core::{DepositRequest, RawBalance};

use async_trait::async_trait;

#[async_trait]
pub trait BalanceApi: Send + Sync {
    /// Balances as the backend returns them; normalisation happens in the carousel.
    async fn get_balances(&self, user_id: &str) -> Result<Vec<RawBalance>>;

    async fn deposit(&self, user_id: &str, request: &DepositRequest) -> Result<()>;
}
