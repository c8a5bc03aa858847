// Compound V2 pool source - normalizes cToken pool data to market snapshots
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::LendingDataSource;
use crate::models::{MarketSnapshot, Token};
use crate::risk::RiskError;

/// One Compound V2 pool in the protocol's own vocabulary: `supply_apy` is
/// already an annualized decimal fraction, `total_liability_qty` is what the
/// pool owes its suppliers and `total_borrow_qty` what borrowers owe it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundPoolSnapshot {
    pub token: Token,
    pub supply_apy: f64,
    pub total_liability_qty: f64,
    pub total_borrow_qty: f64,
}

impl From<CompoundPoolSnapshot> for MarketSnapshot {
    fn from(pool: CompoundPoolSnapshot) -> Self {
        MarketSnapshot::new(
            pool.token,
            pool.supply_apy,
            pool.total_liability_qty,
            pool.total_borrow_qty,
        )
    }
}

/// Raw pool feed, implemented by the on-chain fetch layer.
#[async_trait]
pub trait CompoundV2Api: Send + Sync {
    async fn pool_snapshots(&self) -> Result<Vec<CompoundPoolSnapshot>, RiskError>;
}

/// Lending data source that normalizes Compound V2 pools.
pub struct CompoundV2Source<C> {
    api: C,
}

impl<C> CompoundV2Source<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: CompoundV2Api> LendingDataSource for CompoundV2Source<C> {
    fn protocol_name(&self) -> &'static str {
        "compound_v2"
    }

    async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>, RiskError> {
        let pools = self.api.pool_snapshots().await?;
        debug!(
            protocol = self.protocol_name(),
            pools = pools.len(),
            "Fetched Compound V2 pool snapshots"
        );
        Ok(pools.into_iter().map(MarketSnapshot::from).collect())
    }
}
