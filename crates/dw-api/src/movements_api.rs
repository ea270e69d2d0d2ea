use crate::Result;

use dw_core::Movement;

use async_trait::async_trait;

#[async_trait]
pub trait MovementsApi: Send + Sync {
    async fn get_movements(&self, user_id: &str, limit: u32, offset: u32) -> Result<Vec<Movement>>;
}
