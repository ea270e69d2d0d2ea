use crate::models::currency::Currency;
use crate::models::user_contact::UserContact;
use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub asset_code: String,
    pub asset_type: String,
    pub amount: Decimal,
    /// Destination user id, or CVU for external accounts
    pub destination: String,
    pub description: String,
}

impl TransferRequest {
    /// Build a transfer to `contact`, preferring the app user id over the CVU.
    #[track_caller]
    pub fn to_contact(
        contact: &UserContact,
        currency: Currency,
        amount: Decimal,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        let destination = contact
            .contact_id
            .clone()
            .or_else(|| contact.cvu.clone())
            .ok_or_else(|| CoreError::Validation {
                message: format!("Contact '{}' has no user id or CVU", contact.full_name),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if amount <= Decimal::ZERO {
            return Err(CoreError::Validation {
                message: format!("Transfer amount must be positive, got {amount}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            asset_code: currency.asset_code().to_string(),
            asset_type: currency.asset_type().to_string(),
            amount,
            destination,
            description: description.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub asset_code: String,
    pub asset_type: String,
    pub amount: Decimal,
    pub description: String,
}

impl DepositRequest {
    #[track_caller]
    pub fn new(
        currency: Currency,
        amount: Decimal,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::Validation {
                message: format!("Deposit amount must be positive, got {amount}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            asset_code: currency.asset_code().to_string(),
            asset_type: currency.asset_type().to_string(),
            amount,
            description: description.into(),
        })
    }
}
