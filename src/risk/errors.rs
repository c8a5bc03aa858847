// Risk computation error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("upstream data source failed: {source_name} - {message}")]
    UpstreamData {
        source_name: String,
        message: String,
    },

    #[error("no lending data source registered for protocol: {protocol}")]
    UnknownProtocol { protocol: String },

    #[error("no rate samples collected for asset: {asset}")]
    EmptyAssetSamples { asset: String },

    #[error("rate samples for asset {asset} sum to zero weight")]
    ZeroSampleWeight { asset: String },

    #[error("no assets passed the stablecoin filter")]
    EmptyRateAggregate,

    #[error("total circulating supply across sampled assets is zero")]
    ZeroSupplyWeight,

    #[error("negative weight {weight} for asset {asset}")]
    UndefinedWeight { asset: String, weight: f64 },

    #[error("portfolio for protocol {protocol} is empty")]
    EmptyPortfolio { protocol: String },

    #[error("invalid VaR parameters: {message}")]
    InvalidVarParameters { message: String },

    #[error("historical VaR engine failed: {message}")]
    VarEngine { message: String },
}
