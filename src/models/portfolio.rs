// Signed position portfolio built from a protocol's market inventory
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::market::MarketSnapshot;
use super::token::Token;

/// A signed holding in a single asset. Positive means the protocol is owed
/// tokens, negative means it owes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPosition {
    pub token: Token,
    pub amount: f64,
}

/// Portfolio of signed positions, one per market record. Same-asset markets
/// are kept separate here; merging, if any, belongs to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub positions: Vec<PortfolioPosition>,
}

impl Portfolio {
    /// Build the net-exposure portfolio over a protocol's full inventory.
    /// Every market contributes exactly one position, zero exposure included.
    pub fn from_markets(markets: &[MarketSnapshot]) -> Self {
        let total = markets.len();
        let positions = markets
            .iter()
            .enumerate()
            .map(|(n, market)| {
                let amount = market.net_exposure();
                debug!(
                    market = n + 1,
                    total,
                    token = %market.token.symbol,
                    exposure = amount,
                    total_supply = market.total_supply_qty,
                    total_debt = market.total_debt_qty,
                    "Built net exposure position"
                );
                PortfolioPosition {
                    token: market.token.clone(),
                    amount,
                }
            })
            .collect();

        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
