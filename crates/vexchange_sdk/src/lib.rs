mod amount;
pub mod constants;
pub mod contract_interfaces;
mod error;
mod pair;
mod percent;
mod token;
mod trade;

pub use amount::TokenAmount;
pub use constants::{addrs, ChainId, TradeType, MAX_UINT256};
pub use error::SdkError;
pub use pair::Pair;
pub use percent::Percent;
pub use token::{sort_tokens, Token};
pub use trade::Trade;
