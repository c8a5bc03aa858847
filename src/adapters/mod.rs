pub mod aave_v2;
pub mod compound_v2;
pub mod traits;

pub use aave_v2::{AaveReserveSnapshot, AaveV2Api, AaveV2Source};
pub use compound_v2::{CompoundPoolSnapshot, CompoundV2Api, CompoundV2Source};
pub use traits::{LendingDataSource, StablecoinRegistry, TokenMetadataSource};
