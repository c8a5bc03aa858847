// Risk metrics for DeFi lending exposure: supply-weighted minimum risk
// rate across stablecoin markets and historical VaR over a protocol's net
// asset inventory. Data fetch, token metadata and the VaR statistics all
// live behind injected ports.
pub mod adapters;
pub mod config;
pub mod models;
pub mod risk;
pub mod utils;

pub use adapters::{LendingDataSource, StablecoinRegistry, TokenMetadataSource};
pub use models::{MarketSnapshot, Portfolio, PortfolioPosition, Token, VarOutput, VarParameters, VarRequest};
pub use risk::{HistoricalVarEngine, RiskEngine, RiskError};
