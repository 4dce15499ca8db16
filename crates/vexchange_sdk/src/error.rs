use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("Tokens are on different chains!")]
    ChainMismatch,

    #[error("Tokens have the same address!")]
    IdenticalAddresses,

    #[error("Amounts are for different tokens!")]
    TokenMismatch,

    #[error("Token is not part of this pair!")]
    TokenNotInPair,

    #[error("Insufficient reserves")]
    InsufficientReserves,

    #[error("Insufficient input amount")]
    InsufficientInputAmount,

    #[error("Denominator is zero")]
    ZeroDenominator,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
