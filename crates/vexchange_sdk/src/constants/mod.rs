use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod addrs;

/// The chain tag of a Thor network (the last byte of its genesis block id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainId {
    Mainnet,
    Testnet,
}

impl ChainId {
    pub const fn tag(&self) -> u8 {
        match self {
            ChainId::Mainnet => 0x4a,
            ChainId::Testnet => 0x27,
        }
    }

    /// Returns the network name Connex uses for each ChainId
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainId::Mainnet => "main",
            ChainId::Testnet => "test",
        }
    }
}

impl FromStr for ChainId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(ChainId::Mainnet),
            "test" => Ok(ChainId::Testnet),
            _ => Err("Invalid chain ID"),
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// Amount used for unlimited approvals.
pub const MAX_UINT256: U256 = U256::MAX;

pub const MINIMUM_LIQUIDITY: U256 = U256::from_limbs([1000, 0, 0, 0]);

// 0.3% swap fee, applied as amount * 997 / 1000
pub const FEE_NUMERATOR: U256 = U256::from_limbs([997, 0, 0, 0]);
pub const FEE_DENOMINATOR: U256 = U256::from_limbs([1000, 0, 0, 0]);

pub const BIPS_BASE: U256 = U256::from_limbs([10_000, 0, 0, 0]);
