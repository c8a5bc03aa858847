// Collaborator ports for the external data sources the engine consumes
use std::collections::HashSet;

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::models::{MarketSnapshot, Token};
use crate::risk::RiskError;

/// Common interface for per-protocol lending-market sources.
///
/// Implementations fetch the protocol's raw market records and normalize
/// them to the canonical `MarketSnapshot` field set; all protocol-specific
/// field naming stays behind this boundary.
#[async_trait]
pub trait LendingDataSource: Send + Sync {
    /// Protocol identifier used for routing and error context.
    fn protocol_name(&self) -> &'static str;

    /// Fetch the protocol's current market snapshots.
    async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>, RiskError>;
}

/// Source of the asset set treated as price-stable for rate aggregation.
#[async_trait]
pub trait StablecoinRegistry: Send + Sync {
    async fn stablecoins(&self) -> Result<HashSet<Address>, RiskError>;
}

/// Asset-level metadata lookups.
#[async_trait]
pub trait TokenMetadataSource: Send + Sync {
    /// Total circulating supply of the token, scaled to human units.
    async fn circulating_supply(&self, token: &Token) -> Result<f64, RiskError>;
}
