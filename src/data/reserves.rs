use crate::{
    constants::FACTORY_ADDRESS,
    state::Chain,
    support::{read, ConnexClient, ContractCaller, Generation},
    Error,
};
use alloy_primitives::{Address, U256};
use leptos::{prelude::*, task::spawn_local};
use tracing::{debug, error, trace};
use vexchange_sdk::{
    contract_interfaces::{factory::IVexchangeV2Factory, pair::IVexchangeV2Pair},
    sort_tokens, Pair, Token, TokenAmount,
};

/// Outcome of looking up the pool for two tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum PairState {
    /// No answer yet, or the inputs don't describe a pair.
    Loading,
    /// The factory has no pool for these tokens.
    NotExists,
    /// The pool exists. Its reserves may be zero.
    Exists(Pair),
    /// A contract read failed.
    Failed(Error),
}

impl PairState {
    pub fn pair(&self) -> Option<&Pair> {
        match self {
            PairState::Exists(pair) => Some(pair),
            _ => None,
        }
    }
}

/// Returns the tokens only if both are present and distinct.
pub fn query_tokens(token_a: Option<Token>, token_b: Option<Token>) -> Option<(Token, Token)> {
    match (token_a, token_b) {
        (Some(a), Some(b)) if !a.equals(&b) => Some((a, b)),
        _ => None,
    }
}

/// Resolves the pair address through the factory, then reads its reserves.
///
/// Returns `Ok(None)` when the factory reports the zero address.
pub async fn fetch_pair<R>(
    caller: &R,
    factory: Address,
    token_a: &Token,
    token_b: &Token,
) -> Result<Option<Pair>, Error>
where
    R: ContractCaller + ?Sized,
{
    let pair_address = read(
        caller,
        factory,
        IVexchangeV2Factory::getPairCall {
            tokenA: token_a.address,
            tokenB: token_b.address,
        },
    )
    .await?;

    if pair_address == Address::ZERO {
        return Ok(None);
    }

    let reserves = read(caller, pair_address, IVexchangeV2Pair::getReservesCall {}).await?;
    let (token0, token1) = sort_tokens(token_a.clone(), token_b.clone())?;

    let pair = Pair::new(
        TokenAmount::new(token0, U256::from(reserves.reserve0)),
        TokenAmount::new(token1, U256::from(reserves.reserve1)),
    )?;

    Ok(Some(pair))
}

/// Like [`fetch_pair`], but folds every outcome into a [`PairState`].
///
/// Issues no calls unless the tokens form a valid query.
pub async fn lookup_pair<R>(
    caller: &R,
    factory: Address,
    token_a: Option<Token>,
    token_b: Option<Token>,
) -> PairState
where
    R: ContractCaller + ?Sized,
{
    let Some((token_a, token_b)) = query_tokens(token_a, token_b) else {
        return PairState::Loading;
    };

    match fetch_pair(caller, factory, &token_a, &token_b).await {
        Ok(Some(pair)) => PairState::Exists(pair),
        Ok(None) => PairState::NotExists,
        Err(e) => {
            error!("pair lookup for {token_a}/{token_b} failed: {e}");
            PairState::Failed(e)
        }
    }
}

/// Stores the result of lookup `issued` unless a newer lookup has started.
///
/// Returns whether `state` changed.
fn settle(state: &mut PairState, generation: &Generation, issued: u64, result: PairState) -> bool {
    if !generation.is_current(issued) {
        trace!("discarding stale pair lookup #{issued}");
        return false;
    }

    *state = result;
    true
}

/// Tracks the pool for two tokens, re-querying when either token or the chain changes.
///
/// Responses to superseded queries are dropped, so a slow answer can never
/// overwrite the state for newer inputs.
pub fn use_pair(
    token_a: Signal<Option<Token>>,
    token_b: Signal<Option<Token>>,
) -> Signal<PairState> {
    let chain = use_context::<Chain>().expect("chain context missing!");

    let state = RwSignal::new(PairState::Loading);
    let generation = Generation::default();

    Effect::new(move |_| {
        let chain_id = chain.get();
        let token_a = token_a.get();
        let token_b = token_b.get();

        let current = generation.next();
        state.set(PairState::Loading);

        if query_tokens(token_a.clone(), token_b.clone()).is_none() {
            return;
        }

        debug!("looking up pair on {chain_id}");
        let generation = generation.clone();
        spawn_local(async move {
            let result = lookup_pair(&ConnexClient, FACTORY_ADDRESS, token_a, token_b).await;
            state.maybe_update(|state| settle(state, &generation, current, result));
        });
    });

    state.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::mock::MockCaller;
    use alloy_primitives::address;
    use alloy_sol_types::{SolCall, SolValue};
    use futures::executor::block_on;
    use vexchange_sdk::ChainId;

    const FACTORY: Address = address!("0xB312582C023Cc4938CF0faEA2fd609b46D7509A2");
    const PAIR: Address = address!("0x00000000000000000000000000000000000000AB");

    fn token(address: Address, symbol: &str) -> Token {
        Token::new(ChainId::Testnet, address, 18, symbol, symbol)
    }

    fn low() -> Token {
        token(address!("0x0000000000000000000000000000000000000001"), "LOW")
    }

    fn high() -> Token {
        token(address!("0x0000000000000000000000000000000000000002"), "HIGH")
    }

    fn existing_pool() -> MockCaller {
        MockCaller::default()
            .respond(IVexchangeV2Factory::getPairCall::SELECTOR, PAIR.abi_encode())
            .respond(
                IVexchangeV2Pair::getReservesCall::SELECTOR,
                (U256::from(100), U256::from(200), U256::from(7)).abi_encode_params(),
            )
    }

    #[test]
    fn identical_tokens_issue_no_calls() {
        let caller = existing_pool();
        let state = block_on(lookup_pair(&caller, FACTORY, Some(low()), Some(low())));

        assert_eq!(state, PairState::Loading);
        assert_eq!(caller.call_count(), 0);
    }

    #[test]
    fn missing_token_issues_no_calls() {
        let caller = existing_pool();

        assert_eq!(
            block_on(lookup_pair(&caller, FACTORY, None, Some(high()))),
            PairState::Loading
        );
        assert_eq!(
            block_on(lookup_pair(&caller, FACTORY, Some(low()), None)),
            PairState::Loading
        );
        assert_eq!(caller.call_count(), 0);
    }

    #[test]
    fn reserves_follow_canonical_order() {
        let forward = block_on(lookup_pair(&existing_pool(), FACTORY, Some(low()), Some(high())));
        let backward = block_on(lookup_pair(&existing_pool(), FACTORY, Some(high()), Some(low())));

        assert_eq!(forward, backward);

        let pair = forward.pair().cloned().unwrap();
        assert_eq!(pair.token0(), &low());
        assert_eq!(pair.reserve0().raw, U256::from(100));
        assert_eq!(pair.reserve1().raw, U256::from(200));
    }

    #[test]
    fn queries_factory_then_pair() {
        let caller = existing_pool();
        block_on(lookup_pair(&caller, FACTORY, Some(high()), Some(low())));

        assert_eq!(
            *caller.calls.borrow(),
            vec![
                (FACTORY, IVexchangeV2Factory::getPairCall::SELECTOR),
                (PAIR, IVexchangeV2Pair::getReservesCall::SELECTOR),
            ]
        );
    }

    #[test]
    fn zero_address_means_no_pool() {
        let caller = MockCaller::default()
            .respond(IVexchangeV2Factory::getPairCall::SELECTOR, Address::ZERO.abi_encode());

        let state = block_on(lookup_pair(&caller, FACTORY, Some(low()), Some(high())));

        assert_eq!(state, PairState::NotExists);
        assert_eq!(caller.call_count(), 1);
    }

    #[test]
    fn empty_pool_still_exists() {
        let caller = MockCaller::default()
            .respond(IVexchangeV2Factory::getPairCall::SELECTOR, PAIR.abi_encode())
            .respond(
                IVexchangeV2Pair::getReservesCall::SELECTOR,
                (U256::ZERO, U256::ZERO, U256::ZERO).abi_encode_params(),
            );

        let state = block_on(lookup_pair(&caller, FACTORY, Some(low()), Some(high())));

        let pair = state.pair().cloned().unwrap();
        assert!(pair.reserve0().is_zero());
        assert!(pair.reserve1().is_zero());
    }

    #[test]
    fn read_failure_is_reported() {
        let caller = MockCaller::default()
            .respond(IVexchangeV2Factory::getPairCall::SELECTOR, PAIR.abi_encode())
            .fail(
                IVexchangeV2Pair::getReservesCall::SELECTOR,
                Error::Connex("node unreachable".to_string()),
            );

        let state = block_on(lookup_pair(&caller, FACTORY, Some(low()), Some(high())));

        assert_eq!(
            state,
            PairState::Failed(Error::Connex("node unreachable".to_string()))
        );
    }

    #[test]
    fn late_answer_to_an_old_lookup_is_dropped() {
        let generation = Generation::default();
        let mut state = PairState::Loading;

        let first = generation.next();
        let second = generation.next();

        let newer = block_on(lookup_pair(&existing_pool(), FACTORY, Some(low()), Some(high())));
        assert!(settle(&mut state, &generation, second, newer.clone()));

        assert!(!settle(&mut state, &generation, first, PairState::NotExists));
        assert_eq!(state, newer);
    }

    #[test]
    fn undecodable_reply_is_reported() {
        let caller =
            MockCaller::default().respond(IVexchangeV2Factory::getPairCall::SELECTOR, vec![0x01]);

        let state = block_on(lookup_pair(&caller, FACTORY, Some(low()), Some(high())));

        assert!(matches!(state, PairState::Failed(Error::Abi(_))));
        assert_eq!(caller.call_count(), 1);
    }
}
