use alloy_primitives::{Address, U256};
use leptos::prelude::window;
use vexchange_sdk::{Percent, TokenAmount, Trade};
use web_sys::js_sys;

pub fn alert(msg: impl AsRef<str>) {
    let _ = window().alert_with_message(msg.as_ref());
}

/// `0x1234...abcd`
pub fn shorten_address(address: &Address) -> String {
    let address = address.to_checksum(None);
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Milliseconds since the unix epoch.
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Unix timestamp (in seconds) `minutes` from now.
pub fn deadline_from_now(minutes: u64) -> U256 {
    U256::from(now_millis() / 1000 + minutes * 60)
}

/// The amounts a trade may move once slippage is taken into account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlippageAdjustedAmounts {
    /// Most that may be paid.
    pub input: Option<TokenAmount>,
    /// Least that may be received.
    pub output: Option<TokenAmount>,
}

pub fn compute_slippage_adjusted_amounts(
    trade: Option<&Trade>,
    allowed_slippage: u16,
) -> SlippageAdjustedAmounts {
    let Some(trade) = trade else {
        return SlippageAdjustedAmounts::default();
    };
    let slippage = Percent::from_bips(allowed_slippage);

    SlippageAdjustedAmounts {
        input: trade.maximum_amount_in(&slippage).ok(),
        output: trade.minimum_amount_out(&slippage).ok(),
    }
}
