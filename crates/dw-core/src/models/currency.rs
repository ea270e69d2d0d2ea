use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Currencies a wallet can hold, in carousel display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Currency {
    #[default]
    Uyu,
    Usd,
    Usdc,
}

impl Currency {
    /// Fixed display order, independent of API order.
    pub const DISPLAY_ORDER: [Currency; 3] = [Currency::Uyu, Currency::Usd, Currency::Usdc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uyu => "UYU",
            Self::Usd => "USD",
            Self::Usdc => "USDc",
        }
    }

    /// Asset code used in deposit and transfer payloads
    pub fn asset_code(&self) -> &'static str {
        match self {
            Self::Uyu => "UYU",
            Self::Usd => "USD",
            Self::Usdc => "USDC",
        }
    }

    /// Asset type used in deposit and transfer payloads
    pub fn asset_type(&self) -> &'static str {
        match self {
            Self::Uyu | Self::Usd => "fiat",
            Self::Usdc => "crypto",
        }
    }

    pub fn display_position(&self) -> usize {
        match self {
            Self::Uyu => 0,
            Self::Usd => 1,
            Self::Usdc => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UYU" => Ok(Self::Uyu),
            "USD" => Ok(Self::Usd),
            "USDC" => Ok(Self::Usdc),
            _ => Err(CoreError::InvalidCurrency {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Currency::from_str(&s).map_err(serde::de::Error::custom)
    }
}
