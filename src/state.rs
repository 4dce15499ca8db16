use crate::constants::*;
use alloy_primitives::Address;
use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use std::ops::Deref;
use vexchange_sdk::ChainId;

mod transactions;

pub use transactions::{TransactionInfo, TransactionRecorder, TransactionUpdater, Transactions};

/// The network the app talks to. Data hooks re-query when it changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Chain {
    pub chain_id: RwSignal<ChainId>,
}

impl Chain {
    pub fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id: RwSignal::new(chain_id),
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new(CHAIN_ID)
    }
}

impl Deref for Chain {
    type Target = RwSignal<ChainId>;

    fn deref(&self) -> &Self::Target {
        &self.chain_id
    }
}

#[derive(Copy, Clone)]
pub struct WalletSignals {
    pub account: RwSignal<Option<Address>>,
}

impl WalletSignals {
    pub fn new() -> Self {
        Self {
            account: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.with(Option::is_some)
    }
}

impl Default for WalletSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone)]
pub struct UserSettings {
    pub dark_mode: Signal<bool>,
    pub set_dark_mode: WriteSignal<bool>,
    /// Slippage tolerance in bips.
    pub slippage: RwSignal<u16>,
    /// Transaction deadline in minutes.
    pub deadline: RwSignal<u64>,
}

impl UserSettings {
    pub fn new() -> Self {
        let (dark_mode, set_dark_mode, _) =
            use_local_storage::<bool, FromToStringCodec>("user_dark_mode");

        Self {
            dark_mode,
            set_dark_mode,
            slippage: RwSignal::new(INITIAL_ALLOWED_SLIPPAGE),
            deadline: RwSignal::new(DEFAULT_DEADLINE_FROM_NOW),
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode.update(|dark| *dark = !*dark);
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self::new()
    }
}
