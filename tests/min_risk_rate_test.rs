// End-to-end minimum risk rate pipeline over in-memory protocol doubles
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;
use defi_risk_metrics::adapters::{
    AaveReserveSnapshot, AaveV2Api, AaveV2Source, CompoundPoolSnapshot, CompoundV2Api,
    CompoundV2Source, StablecoinRegistry, TokenMetadataSource,
};
use defi_risk_metrics::models::{Token, VarOutput, VarRequest};
use defi_risk_metrics::risk::{HistoricalVarEngine, RiskEngine, RiskError};
use tokio_test::assert_ok;

struct StaticStables(HashSet<Address>);

#[async_trait]
impl StablecoinRegistry for StaticStables {
    async fn stablecoins(&self) -> Result<HashSet<Address>, RiskError> {
        Ok(self.0.clone())
    }
}

struct StaticSupplies(HashMap<Address, f64>);

#[async_trait]
impl TokenMetadataSource for StaticSupplies {
    async fn circulating_supply(&self, token: &Token) -> Result<f64, RiskError> {
        self.0
            .get(&token.address)
            .copied()
            .ok_or_else(|| RiskError::UpstreamData {
                source_name: "token_metadata".to_string(),
                message: format!("no circulating supply for {}", token.symbol),
            })
    }
}

struct UnusedVarEngine;

#[async_trait]
impl HistoricalVarEngine for UnusedVarEngine {
    async fn portfolio_var(&self, _request: &VarRequest) -> Result<VarOutput, RiskError> {
        unreachable!("rate tests never delegate VaR")
    }
}

struct StaticAave(Vec<AaveReserveSnapshot>);

#[async_trait]
impl AaveV2Api for StaticAave {
    async fn reserve_snapshots(&self) -> Result<Vec<AaveReserveSnapshot>, RiskError> {
        Ok(self.0.clone())
    }
}

struct FailingAave;

#[async_trait]
impl AaveV2Api for FailingAave {
    async fn reserve_snapshots(&self) -> Result<Vec<AaveReserveSnapshot>, RiskError> {
        Err(RiskError::UpstreamData {
            source_name: "aave_v2".to_string(),
            message: "rpc unreachable".to_string(),
        })
    }
}

struct StaticCompound(Vec<CompoundPoolSnapshot>);

#[async_trait]
impl CompoundV2Api for StaticCompound {
    async fn pool_snapshots(&self) -> Result<Vec<CompoundPoolSnapshot>, RiskError> {
        Ok(self.0.clone())
    }
}

fn usdc() -> Token {
    Token::new(Address::repeat_byte(0x01), "USDC", 6)
}

fn usdt() -> Token {
    Token::new(Address::repeat_byte(0x02), "USDT", 6)
}

fn weth() -> Token {
    Token::new(Address::repeat_byte(0xee), "WETH", 18)
}

fn ray(rate: f64) -> f64 {
    rate * 1e27
}

fn aave_reserve(token: Token, rate: f64, supply: f64) -> AaveReserveSnapshot {
    AaveReserveSnapshot {
        token,
        current_liquidity_rate_ray: ray(rate),
        atoken_supply_qty: supply,
        stable_debt_qty: 0.0,
        variable_debt_qty: 0.0,
    }
}

fn compound_pool(token: Token, rate: f64, supply: f64) -> CompoundPoolSnapshot {
    CompoundPoolSnapshot {
        token,
        supply_apy: rate,
        total_liability_qty: supply,
        total_borrow_qty: 0.0,
    }
}

fn engine_with(
    aave: Vec<AaveReserveSnapshot>,
    compound: Vec<CompoundPoolSnapshot>,
    stables: &[Token],
    supplies: &[(Token, f64)],
) -> RiskEngine {
    let stable_set = stables.iter().map(|t| t.address).collect();
    let supply_map = supplies
        .iter()
        .map(|(t, supply)| (t.address, *supply))
        .collect();

    let mut engine = RiskEngine::new(
        Arc::new(StaticStables(stable_set)),
        Arc::new(StaticSupplies(supply_map)),
        Arc::new(UnusedVarEngine),
    );
    engine.register_source(Arc::new(AaveV2Source::new(StaticAave(aave))));
    engine.register_source(Arc::new(CompoundV2Source::new(StaticCompound(compound))));
    engine
}

#[tokio::test]
async fn reference_two_asset_scenario() {
    // USDC: weighted rate 0.02, circulating 100. USDT: 0.04, circulating 300.
    // Expected: (100 * 0.02 + 300 * 0.04) / 400 = 0.035.
    let engine = engine_with(
        vec![aave_reserve(usdc(), 0.02, 1000.0)],
        vec![compound_pool(usdt(), 0.04, 500.0)],
        &[usdc(), usdt()],
        &[(usdc(), 100.0), (usdt(), 300.0)],
    );

    let rate = assert_ok!(engine.min_risk_rate().await);
    assert!((rate - 0.035).abs() < 1e-12, "got {rate}");
}

#[tokio::test]
async fn merges_same_asset_across_protocols() {
    // USDC appears on both protocols; per-asset weighting spans them:
    // (0.02 * 1000 + 0.04 * 3000) / 4000 = 0.035, and with a single asset
    // the second-level weighting leaves it unchanged.
    let engine = engine_with(
        vec![aave_reserve(usdc(), 0.02, 1000.0)],
        vec![compound_pool(usdc(), 0.04, 3000.0)],
        &[usdc()],
        &[(usdc(), 1_000_000.0)],
    );

    let rate = engine.min_risk_rate().await.unwrap();
    assert!((rate - 0.035).abs() < 1e-12, "got {rate}");
}

#[tokio::test]
async fn identical_rates_cancel_weights_exactly() {
    // Rate and weights chosen as exact binary fractions so every product
    // and division is exact: the weights must cancel to the bit.
    let rate = 0.03125;
    let engine = engine_with(
        Vec::new(),
        vec![
            compound_pool(usdc(), rate, 1024.0),
            compound_pool(usdc(), rate, 2048.0),
            compound_pool(usdt(), rate, 512.0),
        ],
        &[usdc(), usdt()],
        &[(usdc(), 256.0), (usdt(), 512.0)],
    );

    assert_eq!(engine.min_risk_rate().await.unwrap(), rate);
}

#[tokio::test]
async fn non_stablecoins_are_filtered_out() {
    // WETH carries an extreme rate; it must not contaminate the average.
    let engine = engine_with(
        vec![
            aave_reserve(usdc(), 0.02, 1000.0),
            aave_reserve(weth(), 5.0, 9_999_999.0),
        ],
        Vec::new(),
        &[usdc()],
        &[(usdc(), 100.0)],
    );

    let rate = engine.min_risk_rate().await.unwrap();
    assert!((rate - 0.02).abs() < 1e-12, "got {rate}");
}

#[tokio::test]
async fn repeated_runs_are_bit_identical() {
    let engine = engine_with(
        vec![
            aave_reserve(usdc(), 0.0213, 1234.5),
            aave_reserve(usdt(), 0.0178, 98_765.0),
        ],
        vec![
            compound_pool(usdc(), 0.0302, 777.7),
            compound_pool(usdt(), 0.0411, 4_242.0),
        ],
        &[usdc(), usdt()],
        &[(usdc(), 55_000_000.0), (usdt(), 83_000_000.0)],
    );

    let first = engine.min_risk_rate().await.unwrap();
    let second = engine.min_risk_rate().await.unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[tokio::test]
async fn upstream_failure_aborts_the_computation() {
    let mut engine = RiskEngine::new(
        Arc::new(StaticStables([usdc().address].into_iter().collect())),
        Arc::new(StaticSupplies(HashMap::new())),
        Arc::new(UnusedVarEngine),
    );
    engine.register_source(Arc::new(AaveV2Source::new(FailingAave)));
    engine.register_source(Arc::new(CompoundV2Source::new(StaticCompound(vec![
        compound_pool(usdc(), 0.03, 1000.0),
    ]))));

    let err = engine.min_risk_rate().await.unwrap_err();
    assert!(matches!(
        err,
        RiskError::UpstreamData { ref source_name, .. } if source_name == "aave_v2"
    ));
}

#[tokio::test]
async fn zero_circulating_supply_across_assets_fails() {
    let engine = engine_with(
        vec![aave_reserve(usdc(), 0.02, 1000.0)],
        Vec::new(),
        &[usdc()],
        &[(usdc(), 0.0)],
    );

    let err = engine.min_risk_rate().await.unwrap_err();
    assert!(matches!(err, RiskError::ZeroSupplyWeight));
}
