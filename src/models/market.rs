// Canonical lending-market snapshot shared by every protocol adapter
use serde::{Deserialize, Serialize};

use super::token::Token;

/// One lending market's state at fetch time, mapped to a uniform field set.
/// Quantities are scaled to human units; `supply_rate` is an annualized
/// yield expressed as a decimal fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub token: Token,
    pub supply_rate: f64,
    pub total_supply_qty: f64,
    pub total_debt_qty: f64,
    /// Tokens sitting idle in the market: `total_supply_qty - total_debt_qty`.
    pub total_liquidity_qty: f64,
}

impl MarketSnapshot {
    pub fn new(token: Token, supply_rate: f64, total_supply_qty: f64, total_debt_qty: f64) -> Self {
        Self {
            token,
            supply_rate,
            total_supply_qty,
            total_debt_qty,
            total_liquidity_qty: total_supply_qty - total_debt_qty,
        }
    }

    /// Net exposure of the protocol in this market: tokens owed to it by
    /// borrowers minus tokens it owes to depositors. Deposits are the
    /// protocol's liability, so a deposit-heavy market is negative.
    pub fn net_exposure(&self) -> f64 {
        self.total_debt_qty - self.total_supply_qty
    }
}
