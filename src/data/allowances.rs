use crate::{
    state::{Chain, Transactions},
    support::{read, ConnexClient, ContractCaller, Generation},
    Error,
};
use alloy_primitives::Address;
use leptos::{prelude::*, task::spawn_local};
use tracing::{trace, warn};
use vexchange_sdk::{contract_interfaces::erc20::IERC20, Token, TokenAmount};

pub async fn fetch_allowance<R>(
    caller: &R,
    token: &Token,
    owner: Address,
    spender: Address,
) -> Result<TokenAmount, Error>
where
    R: ContractCaller + ?Sized,
{
    let raw = read(caller, token.address, IERC20::allowanceCall { owner, spender }).await?;

    Ok(TokenAmount::new(token.clone(), raw))
}

/// What an allowance was read for.
#[derive(Debug, Clone, PartialEq)]
struct AllowanceKey {
    token: Token,
    owner: Address,
    spender: Address,
}

impl AllowanceKey {
    fn new(token: Option<Token>, owner: Option<Address>, spender: Option<Address>) -> Option<Self> {
        Some(Self {
            token: token?,
            owner: owner?,
            spender: spender?,
        })
    }
}

type StoredAllowance = Option<(AllowanceKey, TokenAmount)>;

/// The stored allowance, only if it was read for `key`.
fn allowance_for(stored: &StoredAllowance, key: Option<&AllowanceKey>) -> Option<TokenAmount> {
    match (stored, key) {
        (Some((stored_key, amount)), Some(key)) if stored_key == key => Some(amount.clone()),
        _ => None,
    }
}

/// Folds read `issued` into `stored`. A failed current read clears the value.
///
/// Returns whether `stored` changed.
fn settle(
    stored: &mut StoredAllowance,
    generation: &Generation,
    issued: u64,
    key: AllowanceKey,
    result: Result<TokenAmount, Error>,
) -> bool {
    if !generation.is_current(issued) {
        trace!("discarding stale allowance #{issued}");
        return false;
    }

    match result {
        Ok(amount) => *stored = Some((key, amount)),
        Err(e) => {
            warn!("allowance of {} unavailable: {e}", key.token.symbol);
            *stored = None;
        }
    }
    true
}

/// The amount `spender` may currently transfer from `owner`.
///
/// Refetched whenever the transaction registry changes, so a confirmed
/// approval shows up without a reload. `None` while any input is missing, and
/// until a read for the current token, owner and spender has succeeded.
pub fn use_token_allowance(
    token: Signal<Option<Token>>,
    owner: Signal<Option<Address>>,
    spender: Signal<Option<Address>>,
) -> Signal<Option<TokenAmount>> {
    let chain = use_context::<Chain>().expect("chain context missing!");
    let transactions = use_context::<Transactions>().expect("transactions context missing!");

    let stored = RwSignal::new(StoredAllowance::None);
    let generation = Generation::default();

    let key = Memo::new(move |_| AllowanceKey::new(token.get(), owner.get(), spender.get()));

    Effect::new(move |_| {
        chain.track();
        transactions.track();

        let current = generation.next();

        let Some(key) = key.get() else {
            stored.set(None);
            return;
        };

        // An answer for another token, owner or spender is meaningless now.
        if stored.with_untracked(|stored| allowance_for(stored, Some(&key)).is_none()) {
            stored.set(None);
        }

        let generation = generation.clone();
        spawn_local(async move {
            let result = fetch_allowance(&ConnexClient, &key.token, key.owner, key.spender).await;
            stored.maybe_update(|stored| settle(stored, &generation, current, key, result));
        });
    });

    Signal::derive(move || key.with(|key| stored.with(|stored| allowance_for(stored, key.as_ref()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::mock::MockCaller;
    use alloy_primitives::{address, U256};
    use alloy_sol_types::{SolCall, SolValue};
    use futures::executor::block_on;
    use vexchange_sdk::ChainId;

    const ALICE: Address = address!("0x7567d83b7b8d80addcb281a71d54fc7b3364ffed");
    const BOB: Address = address!("0x0000000000000000000000000000000000000b0b");
    const SPENDER: Address = address!("0x6c0a6e1d922e0e63901301573370b932ae20dadb");

    fn vtho() -> Token {
        Token::new(
            ChainId::Testnet,
            address!("0x0000000000000000000000000000456E65726779"),
            18,
            "VTHO",
            "VeThor",
        )
    }

    #[test]
    fn allowance_is_read_from_the_token_contract() {
        let token = vtho();
        let caller = MockCaller::default()
            .respond(IERC20::allowanceCall::SELECTOR, U256::from(50).abi_encode());

        let allowance = block_on(fetch_allowance(&caller, &token, ALICE, SPENDER)).unwrap();

        assert_eq!(allowance, TokenAmount::new(token.clone(), U256::from(50)));
        assert_eq!(
            *caller.calls.borrow(),
            vec![(token.address, IERC20::allowanceCall::SELECTOR)]
        );
    }

    fn key(owner: Address) -> AllowanceKey {
        AllowanceKey {
            token: vtho(),
            owner,
            spender: SPENDER,
        }
    }

    fn amount(raw: u64) -> TokenAmount {
        TokenAmount::new(vtho(), U256::from(raw))
    }

    #[test]
    fn allowance_of_another_account_is_hidden() {
        let stored = Some((key(ALICE), amount(50)));

        assert_eq!(allowance_for(&stored, Some(&key(ALICE))), Some(amount(50)));
        assert_eq!(allowance_for(&stored, Some(&key(BOB))), None);
        assert_eq!(allowance_for(&stored, None), None);
    }

    #[test]
    fn failed_read_clears_the_allowance() {
        let generation = Generation::default();
        let mut stored = Some((key(ALICE), amount(50)));

        let issued = generation.next();
        let changed = settle(
            &mut stored,
            &generation,
            issued,
            key(BOB),
            Err(Error::Connex("node unreachable".to_string())),
        );

        assert!(changed);
        assert_eq!(stored, None);
    }

    #[test]
    fn late_answer_to_an_old_read_is_dropped() {
        let generation = Generation::default();
        let mut stored = None;

        let first = generation.next();
        let second = generation.next();

        assert!(settle(&mut stored, &generation, second, key(BOB), Ok(amount(0))));
        assert!(!settle(&mut stored, &generation, first, key(ALICE), Ok(amount(50))));
        assert_eq!(stored, Some((key(BOB), amount(0))));
    }
}
