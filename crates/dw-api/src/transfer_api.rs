use crate::Result;

use dw_core::{TransferReceipt, TransferRequest};

use async_trait::async_trait;

#[async_trait]
pub trait TransferApi: Send + Sync {
    async fn transfer(&self, user_id: &str, request: &TransferRequest) -> Result<TransferReceipt>;
}
