// Aave V2 lending-pool source - normalizes reserve data to market snapshots
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::LendingDataSource;
use crate::models::{MarketSnapshot, Token};
use crate::risk::RiskError;

/// Aave rates are ray-scaled fixed point (27 decimals).
const RAY: f64 = 1e27;

/// One Aave V2 reserve as the protocol reports it. The deposit yield is the
/// ray-scaled `currentLiquidityRate`; outstanding debt is split between the
/// stable- and variable-rate tranches, and the supply side is the aToken
/// circulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AaveReserveSnapshot {
    pub token: Token,
    pub current_liquidity_rate_ray: f64,
    pub atoken_supply_qty: f64,
    pub stable_debt_qty: f64,
    pub variable_debt_qty: f64,
}

impl From<AaveReserveSnapshot> for MarketSnapshot {
    fn from(reserve: AaveReserveSnapshot) -> Self {
        let total_debt_qty = reserve.stable_debt_qty + reserve.variable_debt_qty;
        MarketSnapshot::new(
            reserve.token,
            reserve.current_liquidity_rate_ray / RAY,
            reserve.atoken_supply_qty,
            total_debt_qty,
        )
    }
}

/// Raw reserve feed, implemented by the on-chain fetch layer.
#[async_trait]
pub trait AaveV2Api: Send + Sync {
    async fn reserve_snapshots(&self) -> Result<Vec<AaveReserveSnapshot>, RiskError>;
}

/// Lending data source that normalizes Aave V2 reserves.
pub struct AaveV2Source<A> {
    api: A,
}

impl<A> AaveV2Source<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: AaveV2Api> LendingDataSource for AaveV2Source<A> {
    fn protocol_name(&self) -> &'static str {
        "aave_v2"
    }

    async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>, RiskError> {
        let reserves = self.api.reserve_snapshots().await?;
        debug!(
            protocol = self.protocol_name(),
            reserves = reserves.len(),
            "Fetched Aave V2 reserve snapshots"
        );
        Ok(reserves.into_iter().map(MarketSnapshot::from).collect())
    }
}
