use crate::{
    amount::TokenAmount,
    constants::{FEE_DENOMINATOR, FEE_NUMERATOR},
    error::SdkError,
    token::Token,
};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// The reserves of a liquidity pool, always stored in canonical token order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    token_amounts: [TokenAmount; 2],
}

impl Pair {
    pub fn new(amount_a: TokenAmount, amount_b: TokenAmount) -> Result<Self, SdkError> {
        let token_amounts = if amount_a.token.sorts_before(&amount_b.token)? {
            [amount_a, amount_b]
        } else {
            [amount_b, amount_a]
        };

        Ok(Self { token_amounts })
    }

    pub fn token0(&self) -> &Token {
        &self.token_amounts[0].token
    }

    pub fn token1(&self) -> &Token {
        &self.token_amounts[1].token
    }

    pub fn reserve0(&self) -> &TokenAmount {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &TokenAmount {
        &self.token_amounts[1]
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount, SdkError> {
        if token == self.token0() {
            Ok(self.reserve0())
        } else if token == self.token1() {
            Ok(self.reserve1())
        } else {
            Err(SdkError::TokenNotInPair)
        }
    }

    pub fn other_token(&self, token: &Token) -> Result<&Token, SdkError> {
        if token == self.token0() {
            Ok(self.token1())
        } else if token == self.token1() {
            Ok(self.token0())
        } else {
            Err(SdkError::TokenNotInPair)
        }
    }

    fn has_liquidity(&self) -> bool {
        !self.reserve0().is_zero() && !self.reserve1().is_zero()
    }

    /// Amount received for selling `input_amount` into the pool, after the 0.3% fee.
    pub fn get_output_amount(&self, input_amount: &TokenAmount) -> Result<TokenAmount, SdkError> {
        if !self.has_liquidity() {
            return Err(SdkError::InsufficientReserves);
        }

        let input_reserve = self.reserve_of(&input_amount.token)?.raw;
        let output_token = self.other_token(&input_amount.token)?.clone();
        let output_reserve = self.reserve_of(&output_token)?.raw;

        let amount_in_with_fee = input_amount
            .raw
            .checked_mul(FEE_NUMERATOR)
            .ok_or(SdkError::Overflow)?;
        let numerator = amount_in_with_fee
            .checked_mul(output_reserve)
            .ok_or(SdkError::Overflow)?;
        let denominator = input_reserve
            .checked_mul(FEE_DENOMINATOR)
            .and_then(|scaled| scaled.checked_add(amount_in_with_fee))
            .ok_or(SdkError::Overflow)?;
        let output = numerator / denominator;

        if output.is_zero() {
            return Err(SdkError::InsufficientInputAmount);
        }

        Ok(TokenAmount::new(output_token, output))
    }

    /// Amount that must be sold into the pool to receive `output_amount`.
    pub fn get_input_amount(&self, output_amount: &TokenAmount) -> Result<TokenAmount, SdkError> {
        let output_reserve = self.reserve_of(&output_amount.token)?.raw;
        if !self.has_liquidity() || output_amount.raw >= output_reserve {
            return Err(SdkError::InsufficientReserves);
        }

        let input_token = self.other_token(&output_amount.token)?.clone();
        let input_reserve = self.reserve_of(&input_token)?.raw;

        let numerator = input_reserve
            .checked_mul(output_amount.raw)
            .and_then(|product| product.checked_mul(FEE_DENOMINATOR))
            .ok_or(SdkError::Overflow)?;
        let denominator = (output_reserve - output_amount.raw)
            .checked_mul(FEE_NUMERATOR)
            .ok_or(SdkError::Overflow)?;
        let input = (numerator / denominator)
            .checked_add(U256::from(1))
            .ok_or(SdkError::Overflow)?;

        Ok(TokenAmount::new(input_token, input))
    }
}
