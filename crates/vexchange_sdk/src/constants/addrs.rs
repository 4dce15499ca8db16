use super::ChainId;
use crate::token::Token;
use alloy_primitives::Address;
use hex_literal::hex;

// The factory and router are deployed at the same addresses on both networks.
pub const FACTORY_ADDRESS: Address =
    Address::new(hex!("B312582C023Cc4938CF0faEA2fd609b46D7509A2"));
pub const ROUTER_ADDRESS: Address =
    Address::new(hex!("6c0a6e1d922e0e63901301573370b932ae20dadb"));

pub const VVET_MAINNET: Address =
    Address::new(hex!("D8CCDD85abDbF68DFEc95f06c973e87B1b5A9997"));
pub const VVET_TESTNET: Address =
    Address::new(hex!("86fB5343bBecffC86185C023a2A6ccc76fa0BD1b"));

/// Energy (VTHO) is a built-in contract with the same address on every network.
pub const VTHO: Address =
    Address::new(hex!("0000000000000000000000000000456E65726779"));

/// Wrapped VET for the given chain. Approvals are never needed for it.
pub fn vvet(chain_id: ChainId) -> Token {
    let address = match chain_id {
        ChainId::Mainnet => VVET_MAINNET,
        ChainId::Testnet => VVET_TESTNET,
    };
    Token::new(chain_id, address, 18, "VVET", "Wrapped VET")
}

pub fn vtho(chain_id: ChainId) -> Token {
    Token::new(chain_id, VTHO, 18, "VTHO", "VeThor")
}
