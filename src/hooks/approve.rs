use crate::{
    constants::ROUTER_ADDRESS,
    data::use_token_allowance,
    state::{TransactionInfo, TransactionRecorder, Transactions, WalletSignals},
    support::{clause, ConnexClient, TransactionSigner},
    utils::compute_slippage_adjusted_amounts,
    Error,
};
use alloy_primitives::Address;
use connex::Clause;
use leptos::prelude::*;
use tracing::{debug, error, info};
use vexchange_sdk::{
    addrs::vvet, contract_interfaces::erc20::IERC20, Token, TokenAmount, Trade, MAX_UINT256,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalState {
    Unknown,
    NotApproved,
    Pending,
    Approved,
}

/// Decides whether `amount_to_approve` can be spent given the current allowance.
///
/// The checks run in order and the first match wins.
pub fn derive_approval_state(
    amount_to_approve: Option<&TokenAmount>,
    current_allowance: Option<&TokenAmount>,
    pending_approval: bool,
) -> ApprovalState {
    // VVET is treated as VET, which never needs an approval.
    if let Some(amount) = amount_to_approve {
        if amount.token == vvet(amount.token.chain_id) {
            return ApprovalState::Approved;
        }
    }

    let (Some(amount), Some(allowance)) = (amount_to_approve, current_allowance) else {
        return ApprovalState::Unknown;
    };

    if pending_approval {
        return ApprovalState::Pending;
    }

    match allowance.less_than(amount) {
        Ok(true) => ApprovalState::NotApproved,
        Ok(false) => ApprovalState::Approved,
        // allowance still belongs to a previous token
        Err(_) => ApprovalState::Unknown,
    }
}

/// An unlimited `approve(spender, MAX_UINT256)` on `token`.
pub fn approve_clause(token: &Token, spender: Address) -> Clause {
    clause(
        token.address,
        &IERC20::approveCall {
            spender,
            amount: MAX_UINT256,
        },
    )
}

/// Sends an unlimited approval for the wallet to sign and records it as pending.
///
/// Does nothing unless `state` is [`ApprovalState::NotApproved`].
pub async fn submit_approval<S, T>(
    signer: &S,
    recorder: &T,
    state: ApprovalState,
    amount_to_approve: Option<&TokenAmount>,
    spender: Option<Address>,
) -> Result<(), Error>
where
    S: TransactionSigner + ?Sized,
    T: TransactionRecorder + ?Sized,
{
    if state != ApprovalState::NotApproved {
        error!("approve was called unnecessarily, this is likely an error.");
        return Ok(());
    }

    let token = amount_to_approve
        .map(|amount| &amount.token)
        .ok_or_else(|| Error::generic("missing amount to approve"))?;
    let spender = spender.ok_or(Error::MissingSpender)?;

    let response = signer
        .sign_transaction(vec![approve_clause(token, spender)], "approve")
        .await
        .inspect_err(|e| debug!("Failed to approve token: {e}"))?;

    recorder.add_transaction(
        &response,
        TransactionInfo {
            summary: Some(format!("Approve {}", token.symbol)),
            approval_of_token: Some(token.address),
        },
    );

    Ok(())
}

/// Approval status for one amount and spender, plus the means to approve.
#[derive(Copy, Clone)]
pub struct ApproveCallback {
    pub state: Memo<ApprovalState>,
    /// True while the wallet is handling a request.
    pub submitting: RwSignal<bool>,
    amount_to_approve: Signal<Option<TokenAmount>>,
    spender: Signal<Option<Address>>,
    transactions: Transactions,
}

impl ApproveCallback {
    pub async fn approve(&self) -> Result<(), Error> {
        let state = self.state.get_untracked();
        let amount = self.amount_to_approve.get_untracked();

        self.submitting.set(true);
        let result = submit_approval(
            &ConnexClient,
            &self.transactions,
            state,
            amount.as_ref(),
            self.spender.get_untracked(),
        )
        .await;
        self.submitting.set(false);

        result
    }
}

pub fn use_approve_callback(
    amount_to_approve: Signal<Option<TokenAmount>>,
    spender: Signal<Option<Address>>,
) -> ApproveCallback {
    let wallet = use_context::<WalletSignals>().expect("wallet context missing!");
    let transactions = use_context::<Transactions>().expect("transactions context missing!");

    let token = Signal::derive(move || {
        amount_to_approve.with(|amount| amount.as_ref().map(|amount| amount.token.clone()))
    });
    let current_allowance = use_token_allowance(token, wallet.account.into(), spender);

    let state = Memo::new(move |_| {
        let pending = token.with(|token| {
            token
                .as_ref()
                .is_some_and(|token| transactions.has_pending_approval(token.address))
        });

        amount_to_approve.with(|amount| {
            current_allowance
                .with(|allowance| derive_approval_state(amount.as_ref(), allowance.as_ref(), pending))
        })
    });

    Effect::new(move |_| info!("approval state: {:?}", state.get()));

    ApproveCallback {
        state,
        submitting: RwSignal::new(false),
        amount_to_approve,
        spender,
        transactions,
    }
}

/// Approves the router for the most a trade may spend after slippage.
pub fn use_approve_callback_from_trade(
    trade: Signal<Option<Trade>>,
    allowed_slippage: Signal<u16>,
) -> ApproveCallback {
    let amount_to_approve = Signal::derive(move || {
        trade.with(|trade| {
            compute_slippage_adjusted_amounts(trade.as_ref(), allowed_slippage.get()).input
        })
    });

    use_approve_callback(amount_to_approve, Signal::stored(Some(ROUTER_ADDRESS)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::mock::{MockRecorder, MockSigner};
    use alloy_primitives::{address, hex, U256};
    use alloy_sol_types::SolCall;
    use futures::executor::block_on;
    use vexchange_sdk::ChainId;

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

    fn amount(raw: u64) -> TokenAmount {
        TokenAmount::new(vtho(), U256::from(raw))
    }

    #[test]
    fn vvet_never_needs_approval() {
        let vvet = vvet(ChainId::Testnet);
        let required = TokenAmount::new(vvet.clone(), U256::from(100));
        let allowance = TokenAmount::new(vvet, U256::ZERO);

        assert_eq!(
            derive_approval_state(Some(&required), Some(&allowance), true),
            ApprovalState::Approved
        );
        assert_eq!(
            derive_approval_state(Some(&required), None, false),
            ApprovalState::Approved
        );
    }

    #[test]
    fn missing_information_is_unknown() {
        assert_eq!(
            derive_approval_state(None, Some(&amount(50)), false),
            ApprovalState::Unknown
        );
        assert_eq!(
            derive_approval_state(Some(&amount(100)), None, true),
            ApprovalState::Unknown
        );
    }

    #[test]
    fn pending_overrides_comparison() {
        assert_eq!(
            derive_approval_state(Some(&amount(100)), Some(&amount(50)), true),
            ApprovalState::Pending
        );
        assert_eq!(
            derive_approval_state(Some(&amount(100)), Some(&amount(200)), true),
            ApprovalState::Pending
        );
    }

    #[test]
    fn comparison_decides_the_rest() {
        assert_eq!(
            derive_approval_state(Some(&amount(100)), Some(&amount(50)), false),
            ApprovalState::NotApproved
        );
        assert_eq!(
            derive_approval_state(Some(&amount(100)), Some(&amount(200)), false),
            ApprovalState::Approved
        );
        assert_eq!(
            derive_approval_state(Some(&amount(100)), Some(&amount(100)), false),
            ApprovalState::Approved
        );
    }

    #[test]
    fn allowance_for_another_token_is_unknown() {
        let other = TokenAmount::new(
            Token::new(
                ChainId::Testnet,
                address!("0x0000000000000000000000000000000000000001"),
                18,
                "AAA",
                "Token A",
            ),
            U256::from(500),
        );

        assert_eq!(
            derive_approval_state(Some(&amount(100)), Some(&other), false),
            ApprovalState::Unknown
        );
    }

    #[test]
    fn approving_submits_unlimited_allowance() {
        let signer = MockSigner::default();
        let recorder = MockRecorder::default();
        let required = amount(100);
        let state = derive_approval_state(Some(&required), Some(&amount(50)), false);

        block_on(submit_approval(
            &signer,
            &recorder,
            state,
            Some(&required),
            Some(SPENDER),
        ))
        .unwrap();

        let requests = signer.requests.borrow();
        assert_eq!(requests.len(), 1);

        let (clauses, comment) = &requests[0];
        assert_eq!(comment, "approve");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0], approve_clause(&vtho(), SPENDER));

        let data = hex::decode(&clauses[0].data).unwrap();
        let call = IERC20::approveCall::abi_decode(&data).unwrap();
        assert_eq!(call.spender, SPENDER);
        assert_eq!(call.amount, MAX_UINT256);

        let recorded = recorder.recorded.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0.txid, "0xabc");
        assert_eq!(
            recorded[0].1,
            TransactionInfo {
                summary: Some("Approve VTHO".to_string()),
                approval_of_token: Some(vtho().address),
            }
        );
    }

    #[test]
    fn approving_when_not_needed_is_a_no_op() {
        let signer = MockSigner::default();
        let recorder = MockRecorder::default();

        for state in [
            ApprovalState::Approved,
            ApprovalState::Pending,
            ApprovalState::Unknown,
        ] {
            let result = block_on(submit_approval(
                &signer,
                &recorder,
                state,
                Some(&amount(100)),
                Some(SPENDER),
            ));
            assert_eq!(result, Ok(()));
        }

        assert!(signer.requests.borrow().is_empty());
        assert!(recorder.recorded.borrow().is_empty());
    }

    #[test]
    fn rejected_signature_is_returned_and_not_recorded() {
        let signer = MockSigner {
            reject: true,
            ..Default::default()
        };
        let recorder = MockRecorder::default();

        let result = block_on(submit_approval(
            &signer,
            &recorder,
            ApprovalState::NotApproved,
            Some(&amount(100)),
            Some(SPENDER),
        ));

        assert_eq!(result, Err(Error::Connex("user cancelled".to_string())));
        assert_eq!(signer.requests.borrow().len(), 1);
        assert!(recorder.recorded.borrow().is_empty());
    }

    #[test]
    fn missing_spender_is_an_error() {
        let signer = MockSigner::default();
        let recorder = MockRecorder::default();

        let result = block_on(submit_approval(
            &signer,
            &recorder,
            ApprovalState::NotApproved,
            Some(&amount(100)),
            None,
        ));

        assert_eq!(result, Err(Error::MissingSpender));
        assert!(signer.requests.borrow().is_empty());
    }
}
