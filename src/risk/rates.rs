// Second-level weighting: supply-weighted minimum risk rate across assets
use super::errors::RiskError;
use crate::models::Token;

/// Per-asset input to the cross-asset weighting: the asset's market-weighted
/// rate and its total circulating supply in human units.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRate {
    pub token: Token,
    pub weighted_rate: f64,
    pub circulating_supply: f64,
}

/// Average the per-asset rates, weighting each asset by its circulating
/// supply. Larger stablecoins pull the minimum risk rate toward their own
/// lending yield.
pub fn supply_weighted_rate(asset_rates: &[AssetRate]) -> Result<f64, RiskError> {
    if asset_rates.is_empty() {
        return Err(RiskError::EmptyRateAggregate);
    }

    let mut weighted_sum = 0.0;
    let mut total_supply = 0.0;
    for asset in asset_rates {
        if asset.circulating_supply < 0.0 {
            return Err(RiskError::UndefinedWeight {
                asset: asset.token.symbol.clone(),
                weight: asset.circulating_supply,
            });
        }
        weighted_sum += asset.weighted_rate * asset.circulating_supply;
        total_supply += asset.circulating_supply;
    }

    if total_supply == 0.0 {
        return Err(RiskError::ZeroSupplyWeight);
    }

    Ok(weighted_sum / total_supply)
}
