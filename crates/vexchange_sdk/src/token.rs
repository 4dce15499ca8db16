use crate::{constants::ChainId, error::SdkError};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A VIP-180 (ERC-20 compatible) token on a specific chain.
///
/// Two tokens are equal when they share a chain and an address; the metadata
/// is informational only.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl Token {
    pub fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    pub fn equals(&self, other: &Token) -> bool {
        self == other
    }

    /// Canonical pair ordering: the token with the lower address comes first.
    ///
    /// Fails if the tokens are on different chains or share an address.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, SdkError> {
        if self.chain_id != other.chain_id {
            return Err(SdkError::ChainMismatch);
        }
        if self.address == other.address {
            return Err(SdkError::IdenticalAddresses);
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// Returns the two tokens in canonical order.
pub fn sort_tokens(token_a: Token, token_b: Token) -> Result<(Token, Token), SdkError> {
    if token_a.sorts_before(&token_b)? {
        Ok((token_a, token_b))
    } else {
        Ok((token_b, token_a))
    }
}
