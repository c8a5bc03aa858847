// Cross-protocol rate sample aggregation keyed by underlying asset
use std::collections::BTreeMap;

use alloy_primitives::Address;

use super::errors::RiskError;
use crate::models::{MarketSnapshot, Token};

/// One market's contribution to an asset's rate: the market yield and the
/// supplied quantity weighting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSample {
    pub rate: f64,
    pub weight: f64,
}

/// Rate samples grouped by underlying asset, accumulated across every
/// protocol source. Accumulation is commutative; a BTreeMap keeps asset
/// iteration in address order so repeated runs over the same snapshots
/// produce bit-identical sums.
#[derive(Debug, Default)]
pub struct RateSampleSet {
    assets: BTreeMap<Address, AssetSamples>,
}

#[derive(Debug)]
struct AssetSamples {
    token: Token,
    samples: Vec<RateSample>,
}

impl RateSampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a market's (rate, supplied quantity) pair under its asset,
    /// creating the sample list on first sight.
    pub fn add_market(&mut self, market: &MarketSnapshot) {
        let entry = self
            .assets
            .entry(market.token.address)
            .or_insert_with(|| AssetSamples {
                token: market.token.clone(),
                samples: Vec::new(),
            });
        entry.samples.push(RateSample {
            rate: market.supply_rate,
            weight: market.total_supply_qty,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Tokens holding samples, in address order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.assets.values().map(|entry| &entry.token)
    }

    /// Supply-weighted average rate for one asset over its collected
    /// samples. The denominator is checked before any division: an unknown
    /// or sample-less asset, a negative weight, or an all-zero weight set
    /// each surface as their own error.
    pub fn weighted_rate(&self, asset: Address) -> Result<f64, RiskError> {
        let entry = match self.assets.get(&asset) {
            Some(entry) if !entry.samples.is_empty() => entry,
            _ => {
                return Err(RiskError::EmptyAssetSamples {
                    asset: asset.to_string(),
                })
            }
        };

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for sample in &entry.samples {
            if sample.weight < 0.0 {
                return Err(RiskError::UndefinedWeight {
                    asset: entry.token.symbol.clone(),
                    weight: sample.weight,
                });
            }
            weighted_sum += sample.rate * sample.weight;
            total_weight += sample.weight;
        }

        if total_weight == 0.0 {
            return Err(RiskError::ZeroSampleWeight {
                asset: entry.token.symbol.clone(),
            });
        }

        Ok(weighted_sum / total_weight)
    }
}
