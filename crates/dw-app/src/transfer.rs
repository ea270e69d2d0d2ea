use dw_api::{BalanceApi, TransferApi};
use dw_core::{ActionResult, Currency, DepositRequest, TransferReceipt, TransferRequest, UserContact};
use dw_interaction::AmountEntry;

use std::sync::Arc;

use rust_decimal::Decimal;

/// Submits confirmed transfers and deposits.
///
/// Failures come back as `ActionResult::failure` carrying the validation or server
/// message for the inline alert.
pub struct TransferService {
    transfers: Arc<dyn TransferApi>,
    balances: Arc<dyn BalanceApi>,
}

impl TransferService {
    pub fn new(transfers: Arc<dyn TransferApi>, balances: Arc<dyn BalanceApi>) -> Self {
        Self {
            transfers,
            balances,
        }
    }

    /// Send the amount typed in `entry` to `recipient`, debiting the entry's source balance.
    pub async fn submit(
        &self,
        user_id: &str,
        entry: &AmountEntry,
        recipient: &UserContact,
        description: &str,
    ) -> ActionResult<TransferReceipt> {
        if !entry.can_continue() {
            return ActionResult::failure(format!(
                "Enter an amount up to your {} balance",
                entry.source()
            ));
        }
        let Some(amount) = entry.source_amount() else {
            return ActionResult::failure("No exchange rate available for this transfer");
        };

        self.transfer(user_id, recipient, entry.source(), amount, description)
            .await
    }

    pub async fn transfer(
        &self,
        user_id: &str,
        recipient: &UserContact,
        currency: Currency,
        amount: Decimal,
        description: &str,
    ) -> ActionResult<TransferReceipt> {
        let request = match TransferRequest::to_contact(recipient, currency, amount, description) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("Transfer rejected locally: {e}");
                return ActionResult::failure(validation_message(&e));
            }
        };

        match self.transfers.transfer(user_id, &request).await {
            Ok(receipt) => {
                log::info!(
                    "Transfer {} submitted: {} {} to {} ({})",
                    receipt.id,
                    request.amount,
                    currency,
                    request.destination,
                    receipt.status
                );
                ActionResult::ok_with_message(receipt, "Transfer sent")
            }
            Err(e) => {
                log::warn!("Transfer failed: {e}");
                ActionResult::failure(e.user_message())
            }
        }
    }

    pub async fn deposit(
        &self,
        user_id: &str,
        currency: Currency,
        amount: Decimal,
        description: &str,
    ) -> ActionResult<()> {
        let request = match DepositRequest::new(currency, amount, description) {
            Ok(request) => request,
            Err(e) => return ActionResult::failure(validation_message(&e)),
        };

        match self.balances.deposit(user_id, &request).await {
            Ok(()) => {
                log::info!("Deposit of {amount} {currency} submitted");
                ActionResult::ok_with_message((), "Deposit requested")
            }
            Err(e) => {
                log::warn!("Deposit failed: {e}");
                ActionResult::failure(e.user_message())
            }
        }
    }
}

fn validation_message(error: &dw_core::CoreError) -> String {
    match error {
        dw_core::CoreError::Validation { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
