use crate::models::action_id::ActionId;
use crate::models::currency::Currency;

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One balance per currency for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub currency: Currency,
    pub amount: Decimal,
    pub available_actions: BTreeSet<ActionId>,
}

/// Balance entry as it arrives from the Balance API.
///
/// Fields are kept loose so one malformed entry never fails the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalance {
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub available_actions: Vec<String>,
}

impl Balance {
    pub fn new(currency: Currency, amount: Decimal, actions: &[ActionId]) -> Self {
        Self {
            currency,
            amount,
            available_actions: actions.iter().copied().collect(),
        }
    }

    /// Zero balance shown when the API returned nothing usable.
    pub fn placeholder() -> Self {
        Self {
            currency: Currency::default(),
            amount: Decimal::ZERO,
            available_actions: BTreeSet::new(),
        }
    }

    pub fn allows(&self, action: ActionId) -> bool {
        self.available_actions.contains(&action)
    }

    /// Parse a raw entry, returning `None` for unknown currencies or unparseable amounts.
    /// Unknown action identifiers are dropped individually.
    pub fn from_raw(raw: &RawBalance) -> Option<Self> {
        let currency = Currency::from_str(&raw.currency).ok()?;
        let amount = match &raw.amount {
            Value::Number(n) => Decimal::from_str(&n.to_string())
                .or_else(|_| Decimal::from_scientific(&n.to_string()))
                .ok()?,
            Value::String(s) => Decimal::from_str(s.trim()).ok()?,
            _ => return None,
        };
        let available_actions = raw
            .available_actions
            .iter()
            .filter_map(|a| ActionId::from_str(a).ok())
            .collect();

        Some(Self {
            currency,
            amount,
            available_actions,
        })
    }

    /// Orders balances UYU, USD, USDc regardless of input order.
    ///
    /// Missing currencies are omitted; duplicates keep the first occurrence.
    /// An input with no usable entry yields exactly one placeholder.
    pub fn normalize(raw: &[RawBalance]) -> Vec<Balance> {
        let parsed: Vec<Balance> = raw.iter().filter_map(Balance::from_raw).collect();

        let ordered: Vec<Balance> = Currency::DISPLAY_ORDER
            .iter()
            .filter_map(|currency| parsed.iter().find(|b| b.currency == *currency).cloned())
            .collect();

        if ordered.is_empty() {
            return vec![Balance::placeholder()];
        }

        ordered
    }
}
