// Client port to the external historical-simulation VaR engine
use async_trait::async_trait;

use super::errors::RiskError;
use crate::models::{VarOutput, VarRequest};

/// The engine receives the full portfolio plus VaR parameters and owns the
/// resampling and percentile method; nothing here inspects its statistics.
/// Injected into the risk engine so tests can substitute a double.
#[async_trait]
pub trait HistoricalVarEngine: Send + Sync {
    async fn portfolio_var(&self, request: &VarRequest) -> Result<VarOutput, RiskError>;
}
