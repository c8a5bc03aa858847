pub mod market;
pub mod portfolio;
pub mod token;
pub mod var;

pub use market::MarketSnapshot;
pub use portfolio::{Portfolio, PortfolioPosition};
pub use token::Token;
pub use var::{VarOutput, VarParameters, VarRequest};
