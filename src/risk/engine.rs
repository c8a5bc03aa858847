// Risk engine - routes protocol data into the two risk computations
use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info};

use super::errors::RiskError;
use super::rates::{supply_weighted_rate, AssetRate};
use super::samples::RateSampleSet;
use super::var::HistoricalVarEngine;
use crate::adapters::{LendingDataSource, StablecoinRegistry, TokenMetadataSource};
use crate::models::{Portfolio, VarOutput, VarParameters, VarRequest};

/// Entry points for the minimum risk rate and protocol VaR computations.
///
/// Holds no computation state: every call re-fetches through the injected
/// ports and rebuilds its working set from scratch. Sources are kept in a
/// BTreeMap so protocols are always consumed in name order, which keeps the
/// floating-point accumulation reproducible across calls.
pub struct RiskEngine {
    sources: BTreeMap<&'static str, Arc<dyn LendingDataSource>>,
    stablecoins: Arc<dyn StablecoinRegistry>,
    token_metadata: Arc<dyn TokenMetadataSource>,
    var_engine: Arc<dyn HistoricalVarEngine>,
}

impl RiskEngine {
    pub fn new(
        stablecoins: Arc<dyn StablecoinRegistry>,
        token_metadata: Arc<dyn TokenMetadataSource>,
        var_engine: Arc<dyn HistoricalVarEngine>,
    ) -> Self {
        Self {
            sources: BTreeMap::new(),
            stablecoins,
            token_metadata,
            var_engine,
        }
    }

    /// Register a protocol source. A later registration replaces an earlier
    /// one under the same protocol name.
    pub fn register_source(&mut self, source: Arc<dyn LendingDataSource>) {
        info!(
            protocol = source.protocol_name(),
            "Registering lending data source"
        );
        self.sources.insert(source.protocol_name(), source);
    }

    pub fn supported_protocols(&self) -> Vec<&'static str> {
        self.sources.keys().copied().collect()
    }

    /// Supply-weighted average yield across the stablecoin lending markets
    /// of every registered protocol.
    ///
    /// Per-protocol fetches run concurrently; they share no state and their
    /// samples merge commutatively. The first fetch failure aborts the whole
    /// computation - there is no partial result.
    pub async fn min_risk_rate(&self) -> Result<f64, RiskError> {
        let stable_set = self.stablecoins.stablecoins().await?;

        let fetches = self.sources.values().map(|source| source.fetch_markets());
        let per_protocol = try_join_all(fetches).await?;

        let mut samples = RateSampleSet::new();
        for markets in &per_protocol {
            for market in markets {
                if stable_set.contains(&market.token.address) {
                    samples.add_market(market);
                }
            }
        }
        info!(
            protocols = per_protocol.len(),
            assets = samples.asset_count(),
            "Aggregated stablecoin rate samples"
        );

        let mut asset_rates = Vec::with_capacity(samples.asset_count());
        for token in samples.tokens() {
            let weighted_rate = samples.weighted_rate(token.address)?;
            let circulating_supply = self.token_metadata.circulating_supply(token).await?;
            debug!(
                token = %token.symbol,
                weighted_rate,
                circulating_supply,
                "Weighted asset rate"
            );
            asset_rates.push(AssetRate {
                token: token.clone(),
                weighted_rate,
                circulating_supply,
            });
        }

        let rate = supply_weighted_rate(&asset_rates)?;
        info!(rate, assets = asset_rates.len(), "Computed minimum risk rate");
        Ok(rate)
    }

    /// Historical VaR of one protocol's net asset inventory.
    ///
    /// Builds the signed net-exposure portfolio over the protocol's full
    /// market list and delegates to the external VaR engine, whose output is
    /// returned unchanged. An empty portfolio never reaches the engine.
    pub async fn protocol_var(
        &self,
        protocol: &str,
        parameters: VarParameters,
    ) -> Result<VarOutput, RiskError> {
        parameters.validate()?;

        let source = self
            .sources
            .get(protocol)
            .ok_or_else(|| RiskError::UnknownProtocol {
                protocol: protocol.to_string(),
            })?;

        let markets = source.fetch_markets().await?;
        let portfolio = Portfolio::from_markets(&markets);
        if portfolio.is_empty() {
            return Err(RiskError::EmptyPortfolio {
                protocol: protocol.to_string(),
            });
        }

        info!(
            protocol,
            positions = portfolio.len(),
            window_days = parameters.window_days,
            confidence = parameters.confidence,
            interval_days = parameters.interval_days,
            "Delegating portfolio VaR"
        );

        let request = VarRequest {
            portfolio,
            parameters,
        };
        self.var_engine.portfolio_var(&request).await
    }
}
