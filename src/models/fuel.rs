//! Fuel product codes.
//!
//! The five products a tanker compartment can carry. The set is closed:
//! dispatch rows only ever bind one of these codes to a slot, and the
//! wire format (sample data, any future export) uses the short codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fuel product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    /// Regular unleaded gasoline.
    #[serde(rename = "UNL")]
    Unl,
    /// Premium gasoline.
    #[serde(rename = "PREM")]
    Prem,
    /// Ultra-low-sulfur diesel (on-road).
    #[serde(rename = "ULSD")]
    Ulsd,
    /// High-sulfur diesel (off-road/dyed).
    #[serde(rename = "HSD")]
    Hsd,
    /// Kerosene.
    #[serde(rename = "K-1")]
    K1,
}

/// Error returned when parsing an unrecognized product code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel type code: {0}")]
pub struct UnknownFuelType(pub String);

impl FuelType {
    /// All product codes, in menu order.
    pub const ALL: [FuelType; 5] = [
        FuelType::Unl,
        FuelType::Prem,
        FuelType::Ulsd,
        FuelType::Hsd,
        FuelType::K1,
    ];

    /// The short code used on dispatch rows and in data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Unl => "UNL",
            FuelType::Prem => "PREM",
            FuelType::Ulsd => "ULSD",
            FuelType::Hsd => "HSD",
            FuelType::K1 => "K-1",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = UnknownFuelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNL" => Ok(FuelType::Unl),
            "PREM" => Ok(FuelType::Prem),
            "ULSD" => Ok(FuelType::Ulsd),
            "HSD" => Ok(FuelType::Hsd),
            "K-1" => Ok(FuelType::K1),
            other => Err(UnknownFuelType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for fuel in FuelType::ALL {
            assert_eq!(fuel.as_str().parse::<FuelType>(), Ok(fuel));
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = "JETA".parse::<FuelType>().unwrap_err();
        assert_eq!(err, UnknownFuelType("JETA".to_string()));
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(FuelType::K1.to_string(), "K-1");
        assert_eq!(FuelType::Unl.to_string(), "UNL");
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&FuelType::Ulsd).unwrap();
        assert_eq!(json, "\"ULSD\"");

        let parsed: FuelType = serde_json::from_str("\"K-1\"").unwrap();
        assert_eq!(parsed, FuelType::K1);
    }
}
