use crate::models::currency::Currency;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementDirection {
    In,
    Out,
}

/// An entry of the account history returned by the Movements API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub direction: MovementDirection,
    pub status: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub counterpart: Option<String>,
}

impl Movement {
    /// Amount with the sign implied by the direction
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            MovementDirection::In => self.amount,
            MovementDirection::Out => -self.amount,
        }
    }
}
