use crate::{error::SdkError, token::Token};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A raw integer amount of a specific token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    pub token: Token,
    pub raw: U256,
}

impl TokenAmount {
    pub fn new(token: Token, raw: U256) -> Self {
        Self { token, raw }
    }

    /// Parses a human readable decimal string like `"1.5"` into base units.
    ///
    /// Extra fractional digits beyond the token's decimals are truncated.
    pub fn parse(token: Token, amount: impl AsRef<str>) -> Result<Self, SdkError> {
        let amount = amount.as_ref().trim();
        let decimals = token.decimals as usize;

        let (whole, fraction) = match amount.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (amount, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(SdkError::InvalidAmount(amount.to_string()));
        }

        let mut fraction = fraction.to_string();
        if fraction.len() > decimals {
            fraction.truncate(decimals);
        } else {
            fraction.push_str(&"0".repeat(decimals - fraction.len()));
        }

        let digits = format!("{whole}{fraction}");
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self::new(token, U256::ZERO));
        }

        let raw = U256::from_str_radix(digits, 10)
            .map_err(|_| SdkError::InvalidAmount(amount.to_string()))?;

        Ok(Self::new(token, raw))
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Compares magnitudes. Both amounts must be for the same token.
    pub fn less_than(&self, other: &TokenAmount) -> Result<bool, SdkError> {
        if self.token != other.token {
            return Err(SdkError::TokenMismatch);
        }
        Ok(self.raw < other.raw)
    }

    /// Full precision decimal representation, without trailing zeros.
    pub fn to_exact(&self) -> String {
        let decimals = self.token.decimals as usize;
        if decimals == 0 {
            return self.raw.to_string();
        }

        let factor = U256::from(10u8).pow(U256::from(decimals));
        let integer_part = self.raw / factor;
        let fractional_part = self.raw % factor;

        let fractional_str = format!("{:0>width$}", fractional_part.to_string(), width = decimals);
        let trimmed = fractional_str.trim_end_matches('0');

        if trimmed.is_empty() {
            integer_part.to_string()
        } else {
            format!("{integer_part}.{trimmed}")
        }
    }

    /// Decimal representation cut (not rounded) to `places` fractional digits.
    pub fn to_fixed(&self, places: usize) -> String {
        let exact = self.to_exact();
        let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        if places == 0 {
            return whole.to_string();
        }
        let fraction = &fraction[..fraction.len().min(places)];
        format!("{whole}.{fraction:0<places$}")
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.token.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ChainId;
    use alloy_primitives::address;

    fn token(decimals: u8) -> Token {
        Token::new(
            ChainId::Testnet,
            address!("0x0000000000000000000000000000000000000001"),
            decimals,
            "TKN",
            "Token",
        )
    }

    fn other_token() -> Token {
        Token::new(
            ChainId::Testnet,
            address!("0x0000000000000000000000000000000000000002"),
            18,
            "OTH",
            "Other",
        )
    }

    #[test]
    fn less_than_compares_magnitude() {
        let fifty = TokenAmount::new(token(18), U256::from(50));
        let hundred = TokenAmount::new(token(18), U256::from(100));

        assert_eq!(fifty.less_than(&hundred), Ok(true));
        assert_eq!(hundred.less_than(&fifty), Ok(false));
        assert_eq!(hundred.less_than(&hundred), Ok(false));
    }

    #[test]
    fn less_than_rejects_different_tokens() {
        let a = TokenAmount::new(token(18), U256::from(1));
        let b = TokenAmount::new(other_token(), U256::from(2));

        assert_eq!(a.less_than(&b), Err(SdkError::TokenMismatch));
    }

    #[test]
    fn parse_pads_and_truncates_fraction() {
        let amount = TokenAmount::parse(token(6), "1.5").unwrap();
        assert_eq!(amount.raw, U256::from(1_500_000));

        let amount = TokenAmount::parse(token(2), "0.129").unwrap();
        assert_eq!(amount.raw, U256::from(12));

        let amount = TokenAmount::parse(token(6), ".25").unwrap();
        assert_eq!(amount.raw, U256::from(250_000));

        let amount = TokenAmount::parse(token(18), "0").unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(TokenAmount::parse(token(6), "abc").is_err());
        assert!(TokenAmount::parse(token(6), "").is_err());
        assert!(TokenAmount::parse(token(6), "1.2.3").is_err());
    }

    #[test]
    fn exact_and_fixed_formatting() {
        let amount = TokenAmount::new(token(6), U256::from(1_230_000));
        assert_eq!(amount.to_exact(), "1.23");
        assert_eq!(amount.to_fixed(4), "1.2300");
        assert_eq!(amount.to_fixed(1), "1.2");
        assert_eq!(amount.to_fixed(0), "1");
        assert_eq!(amount.to_string(), "1.23 TKN");

        let whole = TokenAmount::new(token(6), U256::from(7_000_000));
        assert_eq!(whole.to_exact(), "7");
        assert_eq!(whole.to_fixed(2), "7.00");

        let no_decimals = TokenAmount::new(token(0), U256::from(42));
        assert_eq!(no_decimals.to_exact(), "42");
    }
}
