use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Per-balance action offered in the expansion panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    Agregar,
    Enviar,
    Exchange,
    Pagar,
}

impl ActionId {
    pub const ALL: [ActionId; 4] = [
        ActionId::Agregar,
        ActionId::Enviar,
        ActionId::Exchange,
        ActionId::Pagar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agregar => "agregar",
            Self::Enviar => "enviar",
            Self::Exchange => "exchange",
            Self::Pagar => "pagar",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "agregar" => Ok(Self::Agregar),
            "enviar" => Ok(Self::Enviar),
            "exchange" => Ok(Self::Exchange),
            "pagar" => Ok(Self::Pagar),
            _ => Err(CoreError::InvalidAction {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
