use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Asset identity carried through the whole risk pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Scale a raw on-chain quantity down to human units.
    pub fn scaled(&self, raw_qty: f64) -> f64 {
        raw_qty / 10f64.powi(self.decimals as i32)
    }
}
