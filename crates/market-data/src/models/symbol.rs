use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// A tracked asset.
///
/// The set is closed: the display surface only ever offers these symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetSymbol {
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "USDC")]
    Usdc,
}

impl AssetSymbol {
    /// Every tracked symbol in canonical order.
    pub const ALL: [AssetSymbol; 3] = [AssetSymbol::Btc, AssetSymbol::Eth, AssetSymbol::Usdc];

    /// Upper-case ticker as used upstream.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetSymbol::Btc => "BTC",
            AssetSymbol::Eth => "ETH",
            AssetSymbol::Usdc => "USDC",
        }
    }

    /// Human readable asset name.
    pub fn default_title(&self) -> &'static str {
        match self {
            AssetSymbol::Btc => "Bitcoin",
            AssetSymbol::Eth => "Ethereum",
            AssetSymbol::Usdc => "USDC",
        }
    }
}

impl fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetSymbol {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BTC" => Ok(AssetSymbol::Btc),
            "ETH" => Ok(AssetSymbol::Eth),
            "USDC" => Ok(AssetSymbol::Usdc),
            _ => Err(MarketDataError::SymbolNotFound(s.trim().to_string())),
        }
    }
}
