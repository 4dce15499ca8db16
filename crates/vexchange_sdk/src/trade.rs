use crate::{
    amount::TokenAmount, constants::TradeType, error::SdkError, pair::Pair, percent::Percent,
};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A swap through a single pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub trade_type: TradeType,
    pub input_amount: TokenAmount,
    pub output_amount: TokenAmount,
}

impl Trade {
    pub fn exact_in(pair: &Pair, amount_in: TokenAmount) -> Result<Self, SdkError> {
        let output_amount = pair.get_output_amount(&amount_in)?;
        Ok(Self {
            trade_type: TradeType::ExactInput,
            input_amount: amount_in,
            output_amount,
        })
    }

    pub fn exact_out(pair: &Pair, amount_out: TokenAmount) -> Result<Self, SdkError> {
        let input_amount = pair.get_input_amount(&amount_out)?;
        Ok(Self {
            trade_type: TradeType::ExactOutput,
            input_amount,
            output_amount: amount_out,
        })
    }

    /// The most the trader will pay given the slippage tolerance.
    pub fn maximum_amount_in(&self, slippage_tolerance: &Percent) -> Result<TokenAmount, SdkError> {
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => Ok(TokenAmount::new(
                self.input_amount.token.clone(),
                slippage_tolerance.apply_increase(self.input_amount.raw)?,
            )),
        }
    }

    /// The least the trader will receive given the slippage tolerance.
    pub fn minimum_amount_out(&self, slippage_tolerance: &Percent) -> Result<TokenAmount, SdkError> {
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => Ok(TokenAmount::new(
                self.output_amount.token.clone(),
                slippage_tolerance.apply_decrease(self.output_amount.raw)?,
            )),
        }
    }

    /// Token addresses in swap order, as the router expects them.
    pub fn path(&self) -> Vec<Address> {
        vec![
            self.input_amount.token.address,
            self.output_amount.token.address,
        ]
    }
}
