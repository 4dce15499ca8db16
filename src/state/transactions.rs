use crate::{constants::RECEIPT_POLL_INTERVAL_SECS, utils::now_millis};
use alloy_primitives::Address;
use codee::string::JsonSerdeCodec;
use connex::{Connex, Receipt, TxResponse};
use leptos::{prelude::*, task::spawn_local};
use leptos_use::storage::use_local_storage;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, time::Duration};
use tracing::{debug, info, trace, warn};

/// Transactions older than this are no longer treated as pending.
const ONE_DAY_MILLIS: u64 = 86_400_000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    pub hash: String,
    pub summary: Option<String>,
    /// Set when the transaction approves spending of this token.
    pub approval_of_token: Option<Address>,
    pub from: String,
    /// Milliseconds since the unix epoch.
    pub added_time: u64,
    pub receipt: Option<Receipt>,
}

impl TransactionDetails {
    pub fn is_pending(&self) -> bool {
        self.receipt.is_none()
    }

    pub fn is_recent(&self, now: u64) -> bool {
        now.saturating_sub(self.added_time) < ONE_DAY_MILLIS
    }
}

/// Metadata attached to a transaction when it is recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionInfo {
    pub summary: Option<String>,
    pub approval_of_token: Option<Address>,
}

/// Keyed by transaction hash.
pub type TransactionMap = HashMap<String, TransactionDetails>;

/// Accepts submitted transactions for later status tracking.
pub trait TransactionRecorder {
    fn add_transaction(&self, response: &TxResponse, info: TransactionInfo);
}

pub fn record_transaction(
    transactions: &mut TransactionMap,
    response: &TxResponse,
    info: TransactionInfo,
    now: u64,
) {
    if transactions.contains_key(&response.txid) {
        warn!("transaction {} was already recorded", response.txid);
        return;
    }

    transactions.insert(
        response.txid.clone(),
        TransactionDetails {
            hash: response.txid.clone(),
            summary: info.summary,
            approval_of_token: info.approval_of_token,
            from: response.signer.clone(),
            added_time: now,
            receipt: None,
        },
    );
}

/// True if a recent, unconfirmed approval exists for `token`.
pub fn has_pending_approval(transactions: &TransactionMap, token: Address, now: u64) -> bool {
    transactions.values().any(|tx| {
        tx.approval_of_token == Some(token) && tx.is_pending() && tx.is_recent(now)
    })
}

/// The pending-transaction registry, persisted in local storage.
#[derive(Copy, Clone)]
pub struct Transactions {
    pub all: Signal<TransactionMap>,
    set_all: WriteSignal<TransactionMap>,
}

impl Transactions {
    pub fn new() -> Self {
        let (all, set_all, _) = use_local_storage::<TransactionMap, JsonSerdeCodec>("transactions");
        Self { all, set_all }
    }

    pub fn has_pending_approval(&self, token: Address) -> bool {
        self.all
            .with(|transactions| has_pending_approval(transactions, token, now_millis()))
    }

    pub fn pending_count(&self) -> usize {
        self.all
            .with(|transactions| transactions.values().filter(|tx| tx.is_pending()).count())
    }

    /// Subscribes the current reactive scope to registry changes.
    pub fn track(&self) {
        self.all.track();
    }

    fn pending_hashes_untracked(&self) -> Vec<String> {
        let now = now_millis();
        self.all.with_untracked(|transactions| {
            transactions
                .values()
                .filter(|tx| tx.is_pending() && tx.is_recent(now))
                .map(|tx| tx.hash.clone())
                .collect()
        })
    }

    pub fn finalize(&self, hash: &str, receipt: Receipt) {
        self.set_all.update(|transactions| {
            if let Some(tx) = transactions.get_mut(hash) {
                tx.receipt = Some(receipt);
            }
        });
    }
}

impl Default for Transactions {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionRecorder for Transactions {
    fn add_transaction(&self, response: &TxResponse, info: TransactionInfo) {
        info!("recording transaction {}", response.txid);
        self.set_all.update(|transactions| {
            record_transaction(transactions, response, info, now_millis())
        });
    }
}

/// Polls receipts of pending transactions until they are included in a block.
#[component]
pub fn TransactionUpdater() -> impl IntoView {
    info!("rendering <TransactionUpdater/>");

    let transactions = use_context::<Transactions>().expect("transactions context missing!");

    let check_receipts = move || {
        for hash in transactions.pending_hashes_untracked() {
            spawn_local(async move {
                match Connex::get_receipt(&hash).await {
                    Ok(Some(receipt)) => {
                        debug!("transaction {hash} included, reverted: {}", receipt.reverted);
                        transactions.finalize(&hash, receipt);
                    }
                    Ok(None) => trace!("transaction {hash} still pending"),
                    Err(error) => debug!("failed to fetch receipt for {hash}: {error}"),
                }
            });
        }
    };

    let handle = set_interval_with_handle(
        check_receipts,
        Duration::from_secs(RECEIPT_POLL_INTERVAL_SECS),
    )
    .inspect_err(|_| warn!("unable to start the receipt poller"))
    .ok();

    on_cleanup(move || {
        info!("cleaning up <TransactionUpdater/>");
        if let Some(handle) = handle {
            handle.clear();
        }
    });
}
