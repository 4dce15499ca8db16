use crate::{
    components::{ApproveButton, TokenSelect},
    constants::{CHAIN_ID, ROUTER_ADDRESS},
    data::{use_pair, PairState},
    hooks::{use_approve_callback_from_trade, ApprovalState},
    state::{TransactionInfo, TransactionRecorder, Transactions, UserSettings, WalletSignals},
    support::{clause, submit_transaction, ConnexClient, TransactionSigner},
    utils::{alert, compute_slippage_adjusted_amounts, deadline_from_now},
    Error,
};
use alloy_primitives::{Address, U256};
use connex::Clause;
use leptos::{prelude::*, task::spawn_local};
use lucide_leptos::ArrowDown;
use tracing::{debug, info};
use vexchange_sdk::{
    addrs::{vtho, vvet},
    contract_interfaces::router::IVexchangeV2Router,
    Percent, TokenAmount, Trade,
};

/// The router call for an exact input trade.
///
/// VVET on either side is swapped as native VET.
pub fn swap_clause(
    trade: &Trade,
    allowed_slippage: u16,
    recipient: Address,
    deadline: U256,
) -> Result<Clause, Error> {
    let slippage = Percent::from_bips(allowed_slippage);
    let wrapped = vvet(trade.input_amount.token.chain_id);

    let amount_in = trade.maximum_amount_in(&slippage)?.raw;
    let amount_out_min = trade.minimum_amount_out(&slippage)?.raw;
    let path = trade.path();

    if trade.input_amount.token == wrapped {
        let mut clause = clause(
            ROUTER_ADDRESS,
            &IVexchangeV2Router::swapExactVETForTokensCall {
                amountOutMin: amount_out_min,
                path,
                to: recipient,
                deadline,
            },
        );
        clause.value = format!("0x{amount_in:x}");
        Ok(clause)
    } else if trade.output_amount.token == wrapped {
        Ok(clause(
            ROUTER_ADDRESS,
            &IVexchangeV2Router::swapExactTokensForVETCall {
                amountIn: amount_in,
                amountOutMin: amount_out_min,
                path,
                to: recipient,
                deadline,
            },
        ))
    } else {
        Ok(clause(
            ROUTER_ADDRESS,
            &IVexchangeV2Router::swapExactTokensForTokensCall {
                amountIn: amount_in,
                amountOutMin: amount_out_min,
                path,
                to: recipient,
                deadline,
            },
        ))
    }
}

pub async fn submit_swap<S, T>(
    signer: &S,
    recorder: &T,
    trade: &Trade,
    allowed_slippage: u16,
    recipient: Address,
    deadline: U256,
) -> Result<(), Error>
where
    S: TransactionSigner + ?Sized,
    T: TransactionRecorder + ?Sized,
{
    let clause = swap_clause(trade, allowed_slippage, recipient, deadline)?;
    let summary = format!(
        "Swap {} {} for {} {}",
        trade.input_amount.to_fixed(4),
        trade.input_amount.token.symbol,
        trade.output_amount.to_fixed(4),
        trade.output_amount.token.symbol,
    );

    submit_transaction(
        signer,
        recorder,
        vec![clause],
        "swap",
        TransactionInfo {
            summary: Some(summary),
            approval_of_token: None,
        },
    )
    .await
    .map(|_| ())
}

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    let wallet = use_context::<WalletSignals>().expect("wallet context missing!");
    let settings = use_context::<UserSettings>().expect("user settings context missing!");
    let transactions = use_context::<Transactions>().expect("transactions context missing!");

    let input_token = RwSignal::new(Some(vvet(CHAIN_ID)));
    let output_token = RwSignal::new(Some(vtho(CHAIN_ID)));
    let (typed_value, set_typed_value) = signal(String::new());

    let pair = use_pair(input_token.into(), output_token.into());

    let parsed_amount = Memo::new(move |_| {
        let token = input_token.get()?;
        let value = typed_value.get();
        TokenAmount::parse(token, value)
            .ok()
            .filter(|amount| !amount.is_zero())
    });

    let trade = Signal::derive(move || {
        let amount = parsed_amount.get()?;
        pair.with(|state| state.pair().and_then(|pair| Trade::exact_in(pair, amount).ok()))
    });

    let approval = use_approve_callback_from_trade(trade, settings.slippage.into());

    let minimum_received = move || {
        trade.with(|trade| {
            compute_slippage_adjusted_amounts(trade.as_ref(), settings.slippage.get()).output
        })
    };

    let input_symbol = Signal::derive(move || {
        input_token.with(|token| token.as_ref().map(|t| t.symbol.clone()).unwrap_or_default())
    });

    let status = move || match pair.get() {
        PairState::Loading => None,
        PairState::NotExists => Some("No pool exists for this pair yet.".to_string()),
        PairState::Failed(error) => Some(format!("Unable to load the pool: {error}")),
        PairState::Exists(_) => trade
            .with(Option::is_none)
            .then(|| "Enter an amount".to_string()),
    };

    let swap = move |_| {
        let Some(trade) = trade.get_untracked() else {
            return;
        };
        let Some(recipient) = wallet.account.get_untracked() else {
            alert(Error::WalletDisconnected.to_string());
            return;
        };
        let slippage = settings.slippage.get_untracked();
        let deadline = deadline_from_now(settings.deadline.get_untracked());

        spawn_local(async move {
            match submit_swap(&ConnexClient, &transactions, &trade, slippage, recipient, deadline).await
            {
                Ok(()) => {
                    debug!("swap submitted");
                    set_typed_value.set(String::new());
                }
                Err(error) => alert(error.to_string()),
            }
        });
    };

    let can_swap = move || {
        wallet.is_connected()
            && trade.with(Option::is_some)
            && approval.state.get() == ApprovalState::Approved
    };

    on_cleanup(move || info!("cleaning up <Swap/>"));

    view! {
        <div class="swap-card flex flex-col gap-3">
            <div class="flex gap-2 items-center">
                <input
                    class="flex-1"
                    type="text"
                    inputmode="decimal"
                    placeholder="0.0"
                    prop:value=typed_value
                    on:input=move |ev| set_typed_value.set(event_target_value(&ev))
                />
                <TokenSelect selected=input_token />
            </div>
            <div class="flex justify-center">
                <ArrowDown size=18 absolute_stroke_width=true />
            </div>
            <div class="flex gap-2 items-center">
                <div class="flex-1 output-amount">
                    {move || {
                        trade
                            .with(|trade| trade.as_ref().map(|trade| trade.output_amount.to_fixed(6)))
                            .unwrap_or_else(|| "0.0".to_string())
                    }}
                </div>
                <TokenSelect selected=output_token />
            </div>
            <Show when=move || minimum_received().is_some()>
                <p class="text-sm text-muted-foreground">
                    "Minimum received: "
                    {move || minimum_received().map(|amount| amount.to_string())}
                </p>
            </Show>
            <p class="text-sm">{status}</p>
            <ApproveButton callback=approval symbol=input_symbol />
            <button class="w-full" on:click=swap disabled=move || !can_swap()>
                "Swap"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::mock::{MockRecorder, MockSigner};
    use alloy_primitives::{address, hex};
    use alloy_sol_types::SolCall;
    use futures::executor::block_on;
    use vexchange_sdk::{ChainId, Pair, SdkError, Token, TradeType};

    const RECIPIENT: Address = address!("0x7567d83b7b8d80addcb281a71d54fc7b3364ffed");

    fn token(address: Address, symbol: &str) -> Token {
        Token::new(ChainId::Testnet, address, 18, symbol, symbol)
    }

    fn trade(input: Token, output: Token) -> Trade {
        let pair = Pair::new(
            TokenAmount::new(input.clone(), U256::from(1_000_000)),
            TokenAmount::new(output, U256::from(1_000_000)),
        )
        .unwrap();

        Trade::exact_in(&pair, TokenAmount::new(input, U256::from(1000))).unwrap()
    }

    fn decode(clause: &Clause) -> Vec<u8> {
        hex::decode(&clause.data).unwrap()
    }

    #[test]
    fn token_to_token_swap_applies_slippage() {
        let a = token(address!("0x0000000000000000000000000000000000000001"), "AAA");
        let b = token(address!("0x0000000000000000000000000000000000000002"), "BBB");
        let clause = swap_clause(&trade(a.clone(), b.clone()), 50, RECIPIENT, U256::from(99)).unwrap();

        assert_eq!(clause.to, Some(ROUTER_ADDRESS.to_checksum(None)));
        assert_eq!(clause.value, "0x0");

        let call =
            IVexchangeV2Router::swapExactTokensForTokensCall::abi_decode(&decode(&clause)).unwrap();
        assert_eq!(call.amountIn, U256::from(1000));
        assert_eq!(call.amountOutMin, U256::from(991));
        assert_eq!(call.path, vec![a.address, b.address]);
        assert_eq!(call.to, RECIPIENT);
        assert_eq!(call.deadline, U256::from(99));
    }

    #[test]
    fn vvet_input_is_sent_as_value() {
        let vtho = vtho(ChainId::Testnet);
        let clause = swap_clause(&trade(vvet(ChainId::Testnet), vtho), 50, RECIPIENT, U256::from(99)).unwrap();

        assert_eq!(clause.value, "0x3e8");
        let call =
            IVexchangeV2Router::swapExactVETForTokensCall::abi_decode(&decode(&clause)).unwrap();
        assert_eq!(call.amountOutMin, U256::from(991));
    }

    #[test]
    fn vvet_output_is_received_as_vet() {
        let vtho = vtho(ChainId::Testnet);
        let clause = swap_clause(&trade(vtho, vvet(ChainId::Testnet)), 50, RECIPIENT, U256::from(99)).unwrap();

        assert_eq!(clause.value, "0x0");
        let call =
            IVexchangeV2Router::swapExactTokensForVETCall::abi_decode(&decode(&clause)).unwrap();
        assert_eq!(call.amountIn, U256::from(1000));
    }

    #[test]
    fn submitted_swap_is_recorded() {
        let signer = MockSigner::default();
        let recorder = MockRecorder::default();
        let a = token(address!("0x0000000000000000000000000000000000000001"), "AAA");
        let b = token(address!("0x0000000000000000000000000000000000000002"), "BBB");

        block_on(submit_swap(
            &signer,
            &recorder,
            &trade(a, b),
            50,
            RECIPIENT,
            U256::from(99),
        ))
        .unwrap();

        assert_eq!(signer.requests.borrow()[0].1, "swap");

        let recorded = recorder.recorded.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].1.approval_of_token, None);
        assert!(recorded[0].1.summary.as_deref().unwrap().starts_with("Swap "));
    }

    #[test]
    fn overflowing_slippage_bound_is_never_signed() {
        let a = token(address!("0x0000000000000000000000000000000000000001"), "AAA");
        let b = token(address!("0x0000000000000000000000000000000000000002"), "BBB");
        let trade = Trade {
            trade_type: TradeType::ExactOutput,
            input_amount: TokenAmount::new(a, U256::MAX),
            output_amount: TokenAmount::new(b, U256::from(1)),
        };
        let signer = MockSigner::default();
        let recorder = MockRecorder::default();

        let result = block_on(submit_swap(&signer, &recorder, &trade, 50, RECIPIENT, U256::from(99)));

        assert_eq!(result, Err(Error::Sdk(SdkError::Overflow)));
        assert!(signer.requests.borrow().is_empty());
        assert!(recorder.recorded.borrow().is_empty());
    }
}
