//! Reactive reads of on-chain state.

mod allowances;
mod reserves;

pub use allowances::use_token_allowance;
pub use reserves::{query_tokens, use_pair, PairState};
