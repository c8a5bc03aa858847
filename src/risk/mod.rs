// Risk aggregation and VaR orchestration
pub mod engine;
pub mod errors;
pub mod rates;
pub mod samples;
pub mod var;

pub use engine::RiskEngine;
pub use errors::RiskError;
pub use rates::{supply_weighted_rate, AssetRate};
pub use samples::{RateSample, RateSampleSet};
pub use var::HistoricalVarEngine;
