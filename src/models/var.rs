// VaR request and response types exchanged with the historical VaR engine
use serde::{Deserialize, Serialize};

use super::portfolio::Portfolio;
use crate::risk::RiskError;

/// Parameters for a historical-simulation VaR run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarParameters {
    /// Lookback period for historical return sampling, in days.
    pub window_days: u32,
    /// One-sided percentile for the loss estimate, e.g. 0.01.
    pub confidence: f64,
    /// Return-sampling interval, in days.
    pub interval_days: u32,
}

impl Default for VarParameters {
    fn default() -> Self {
        Self {
            window_days: 280,
            confidence: 0.01,
            interval_days: 10,
        }
    }
}

impl VarParameters {
    /// Reject parameter bundles the external engine could not honor,
    /// before any data is fetched.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.window_days == 0 {
            return Err(RiskError::InvalidVarParameters {
                message: "window must be positive".to_string(),
            });
        }
        if self.interval_days == 0 {
            return Err(RiskError::InvalidVarParameters {
                message: "interval must be positive".to_string(),
            });
        }
        if self.interval_days > self.window_days {
            return Err(RiskError::InvalidVarParameters {
                message: format!(
                    "interval of {} days exceeds window of {} days",
                    self.interval_days, self.window_days
                ),
            });
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(RiskError::InvalidVarParameters {
                message: format!("confidence {} must lie in (0, 1)", self.confidence),
            });
        }
        Ok(())
    }
}

/// Complete request handed to the external VaR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarRequest {
    pub portfolio: Portfolio,
    pub parameters: VarParameters,
}

/// The engine's answer, passed through to callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarOutput {
    /// Loss magnitude at the requested confidence.
    pub var: f64,
    /// Expected shortfall beyond the VaR cutoff, when the engine reports it.
    pub cvar: Option<f64>,
    /// Confidence echoed back by the engine.
    pub confidence: f64,
    /// Number of historical observations the estimate rests on.
    pub observations: usize,
    /// Engine-specific diagnostics, opaque to this crate.
    #[serde(default)]
    pub metadata: serde_json::Value,
}
