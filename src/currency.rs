//! Currency types for the traded pairs

use serde::{Deserialize, Serialize};
use std::fmt;

/// In-game currencies quoted in the fixture data
///
/// Serialized as the human-readable label, which is what downstream
/// consumers group and display by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "Chaos Orb")]
    ChaosOrb,
    #[serde(rename = "Divine Orb")]
    DivineOrb,
    #[serde(rename = "Mirror of Kalandra")]
    MirrorOfKalandra,
}

impl Currency {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Currency::ChaosOrb => "Chaos Orb",
            Currency::DivineOrb => "Divine Orb",
            Currency::MirrorOfKalandra => "Mirror of Kalandra",
        }
    }

    /// Parse from display label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Chaos Orb" => Some(Currency::ChaosOrb),
            "Divine Orb" => Some(Currency::DivineOrb),
            "Mirror of Kalandra" => Some(Currency::MirrorOfKalandra),
            _ => None,
        }
    }

    /// Get all supported currencies, cheapest first
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::ChaosOrb,
            Currency::DivineOrb,
            Currency::MirrorOfKalandra,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Directed currency pair: `from` is sold for `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Get the inverse pair
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}
