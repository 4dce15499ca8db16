use std::sync::LazyLock;
use vexchange_sdk::{
    addrs::{vtho, vvet},
    ChainId, Token,
};

pub use vexchange_sdk::addrs::{FACTORY_ADDRESS, ROUTER_ADDRESS};

// Compile-time configuration for chain and node details
pub const CHAIN_ID: ChainId = if cfg!(feature = "mainnet") {
    ChainId::Mainnet
} else {
    ChainId::Testnet
};

pub const EXPLORER: &str = if cfg!(feature = "mainnet") {
    "https://explore.vechain.org"
} else {
    "https://explore-testnet.vechain.org"
};

/// Default slippage tolerance, in bips.
pub const INITIAL_ALLOWED_SLIPPAGE: u16 = 50;

/// Default transaction deadline, in minutes.
pub const DEFAULT_DEADLINE_FROM_NOW: u64 = 20;

/// How often pending transactions are checked for a receipt. Thor produces a block every 10s.
pub const RECEIPT_POLL_INTERVAL_SECS: u64 = 10;

pub static TOKEN_LIST: LazyLock<Vec<Token>> = LazyLock::new(|| vec![vvet(CHAIN_ID), vtho(CHAIN_ID)]);

pub fn find_token(address: &str) -> Option<Token> {
    let address = address.parse::<alloy_primitives::Address>().ok()?;
    TOKEN_LIST
        .iter()
        .find(|token| token.address == address)
        .cloned()
}
