use crate::{constants::BIPS_BASE, error::SdkError};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A rational percentage, `numerator / denominator`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent {
    pub numerator: U256,
    pub denominator: U256,
}

impl Percent {
    /// 1 bip = 0.01%
    pub fn from_bips(bips: u16) -> Self {
        Self {
            numerator: U256::from(bips),
            denominator: BIPS_BASE,
        }
    }

    fn scale(amount: U256, multiplier: U256, divisor: U256) -> Result<U256, SdkError> {
        amount
            .checked_mul(multiplier)
            .ok_or(SdkError::Overflow)?
            .checked_div(divisor)
            .ok_or(SdkError::ZeroDenominator)
    }

    /// Scales `amount` by `(1 + self)`, rounding down.
    pub fn apply_increase(&self, amount: U256) -> Result<U256, SdkError> {
        let multiplier = self
            .denominator
            .checked_add(self.numerator)
            .ok_or(SdkError::Overflow)?;
        Self::scale(amount, multiplier, self.denominator)
    }

    /// Scales `amount` by `1 / (1 + self)`, rounding down.
    pub fn apply_decrease(&self, amount: U256) -> Result<U256, SdkError> {
        let divisor = self
            .denominator
            .checked_add(self.numerator)
            .ok_or(SdkError::Overflow)?;
        Self::scale(amount, self.denominator, divisor)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // two decimal places are enough for slippage settings
        let hundredths = self.numerator * U256::from(10_000) / self.denominator;
        let whole = hundredths / U256::from(100);
        let fraction = hundredths % U256::from(100);
        write!(f, "{whole}.{:0>2}%", fraction.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bips_display() {
        assert_eq!(Percent::from_bips(50).to_string(), "0.50%");
        assert_eq!(Percent::from_bips(100).to_string(), "1.00%");
        assert_eq!(Percent::from_bips(1234).to_string(), "12.34%");
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let broken = Percent {
            numerator: U256::ZERO,
            denominator: U256::ZERO,
        };

        assert_eq!(broken.apply_increase(U256::from(1)), Err(SdkError::ZeroDenominator));
    }

    #[test]
    fn increase_and_decrease() {
        let one_percent = Percent::from_bips(100);

        assert_eq!(one_percent.apply_increase(U256::from(1000)), Ok(U256::from(1010)));
        // 1000 / 1.01 = 990.09...
        assert_eq!(one_percent.apply_decrease(U256::from(1000)), Ok(U256::from(990)));
    }

    #[test]
    fn huge_amounts_overflow() {
        let one_percent = Percent::from_bips(100);

        assert_eq!(one_percent.apply_increase(U256::MAX), Err(SdkError::Overflow));
        assert_eq!(one_percent.apply_decrease(U256::MAX), Err(SdkError::Overflow));
    }
}
