use crate::{
    components::ApproveButton,
    constants::{find_token, ROUTER_ADDRESS},
    data::{use_pair, PairState},
    hooks::{use_approve_callback, ApprovalState},
    state::{TransactionInfo, TransactionRecorder, Transactions, UserSettings, WalletSignals},
    support::{clause, submit_transaction, ConnexClient, TransactionSigner},
    utils::{alert, deadline_from_now},
    Error,
};
use alloy_primitives::{Address, U256};
use connex::Clause;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_params_map;
use tracing::{debug, info};
use vexchange_sdk::{
    addrs::vvet, constants::BIPS_BASE, contract_interfaces::router::IVexchangeV2Router, Pair,
    SdkError, TokenAmount,
};

/// `raw` reduced by `bips` basis points.
fn slippage_floor(raw: U256, bips: u16) -> Result<U256, SdkError> {
    raw.checked_mul(BIPS_BASE.saturating_sub(U256::from(bips)))
        .map(|scaled| scaled / BIPS_BASE)
        .ok_or(SdkError::Overflow)
}

/// The amount of the other token matching `amount` at the pool's current price.
///
/// `None` for an empty pool, where the first provider sets the price, and for
/// amounts too large to price.
fn quote(pair: &Pair, amount: &TokenAmount) -> Option<TokenAmount> {
    let reserve_in = pair.reserve_of(&amount.token).ok()?;
    let other = pair.other_token(&amount.token).ok()?;
    let reserve_out = pair.reserve_of(other).ok()?;

    if reserve_in.is_zero() || reserve_out.is_zero() {
        return None;
    }

    let quoted = amount.raw.checked_mul(reserve_out.raw)? / reserve_in.raw;

    Some(TokenAmount::new(other.clone(), quoted))
}

/// The router call depositing both amounts. A VVET side is deposited as native VET.
pub fn add_liquidity_clause(
    amount_a: &TokenAmount,
    amount_b: &TokenAmount,
    allowed_slippage: u16,
    recipient: Address,
    deadline: U256,
) -> Result<Clause, Error> {
    let wrapped = vvet(amount_a.token.chain_id);

    let vet_side = if amount_a.token == wrapped {
        Some((amount_a, amount_b))
    } else if amount_b.token == wrapped {
        Some((amount_b, amount_a))
    } else {
        None
    };

    if let Some((vet, token)) = vet_side {
        let mut clause = clause(
            ROUTER_ADDRESS,
            &IVexchangeV2Router::addLiquidityVETCall {
                token: token.token.address,
                amountTokenDesired: token.raw,
                amountTokenMin: slippage_floor(token.raw, allowed_slippage)?,
                amountVETMin: slippage_floor(vet.raw, allowed_slippage)?,
                to: recipient,
                deadline,
            },
        );
        clause.value = format!("0x{:x}", vet.raw);
        return Ok(clause);
    }

    Ok(clause(
        ROUTER_ADDRESS,
        &IVexchangeV2Router::addLiquidityCall {
            tokenA: amount_a.token.address,
            tokenB: amount_b.token.address,
            amountADesired: amount_a.raw,
            amountBDesired: amount_b.raw,
            amountAMin: slippage_floor(amount_a.raw, allowed_slippage)?,
            amountBMin: slippage_floor(amount_b.raw, allowed_slippage)?,
            to: recipient,
            deadline,
        },
    ))
}

pub async fn submit_add_liquidity<S, T>(
    signer: &S,
    recorder: &T,
    amount_a: &TokenAmount,
    amount_b: &TokenAmount,
    allowed_slippage: u16,
    recipient: Address,
    deadline: U256,
) -> Result<(), Error>
where
    S: TransactionSigner + ?Sized,
    T: TransactionRecorder + ?Sized,
{
    let summary = format!(
        "Add {} {} and {} {}",
        amount_a.to_fixed(4),
        amount_a.token.symbol,
        amount_b.to_fixed(4),
        amount_b.token.symbol,
    );
    let clause = add_liquidity_clause(amount_a, amount_b, allowed_slippage, recipient, deadline)?;

    submit_transaction(
        signer,
        recorder,
        vec![clause],
        "add liquidity",
        TransactionInfo {
            summary: Some(summary),
            approval_of_token: None,
        },
    )
    .await
    .map(|_| ())
}

#[component]
pub fn AddLiquidity() -> impl IntoView {
    info!("rendering <AddLiquidity/>");

    let wallet = use_context::<WalletSignals>().expect("wallet context missing!");
    let settings = use_context::<UserSettings>().expect("user settings context missing!");
    let transactions = use_context::<Transactions>().expect("transactions context missing!");

    let params = use_params_map();
    let token_a = Signal::derive(move || params.read().get("token_a").and_then(|a| find_token(&a)));
    let token_b = Signal::derive(move || params.read().get("token_b").and_then(|b| find_token(&b)));

    let pair = use_pair(token_a, token_b);

    let (typed_a, set_typed_a) = signal(String::new());
    let (typed_b, set_typed_b) = signal(String::new());

    let amount_a = Memo::new(move |_| {
        TokenAmount::parse(token_a.get()?, typed_a.get())
            .ok()
            .filter(|amount| !amount.is_zero())
    });
    // Follows the pool price once the pool has liquidity.
    let amount_b = Memo::new(move |_| {
        let quoted = amount_a.with(|amount| {
            let amount = amount.as_ref()?;
            pair.with(|state| state.pair().and_then(|pair| quote(pair, amount)))
        });

        quoted.or_else(|| {
            TokenAmount::parse(token_b.get()?, typed_b.get())
                .ok()
                .filter(|amount| !amount.is_zero())
        })
    });
    let has_price = move || amount_a.with(Option::is_some) && pair.with(|state| {
        state.pair().is_some_and(|pair| !pair.reserve0().is_zero())
    });

    let router = Signal::stored(Some(ROUTER_ADDRESS));
    let approval_a = use_approve_callback(amount_a.into(), router);
    let approval_b = use_approve_callback(amount_b.into(), router);

    let symbol = |token: Signal<Option<vexchange_sdk::Token>>| {
        Signal::derive(move || token.with(|t| t.as_ref().map(|t| t.symbol.clone()).unwrap_or_default()))
    };
    let symbol_a = symbol(token_a);
    let symbol_b = symbol(token_b);

    let can_supply = move || {
        wallet.is_connected()
            && amount_a.with(Option::is_some)
            && amount_b.with(Option::is_some)
            && approval_a.state.get() == ApprovalState::Approved
            && approval_b.state.get() == ApprovalState::Approved
    };

    let supply = move |_| {
        let (Some(a), Some(b)) = (amount_a.get_untracked(), amount_b.get_untracked()) else {
            return;
        };
        let Some(recipient) = wallet.account.get_untracked() else {
            alert(Error::WalletDisconnected.to_string());
            return;
        };
        let slippage = settings.slippage.get_untracked();
        let deadline = deadline_from_now(settings.deadline.get_untracked());

        spawn_local(async move {
            match submit_add_liquidity(&ConnexClient, &transactions, &a, &b, slippage, recipient, deadline).await {
                Ok(()) => {
                    debug!("liquidity added");
                    set_typed_a.set(String::new());
                    set_typed_b.set(String::new());
                }
                Err(error) => alert(error.to_string()),
            }
        });
    };

    let pool_status = move || match pair.get() {
        PairState::Loading => "Loading pool...".to_string(),
        PairState::NotExists => "You are the first liquidity provider. The ratio you add sets the price.".to_string(),
        PairState::Failed(error) => format!("Unable to load the pool: {error}"),
        PairState::Exists(pair) => format!("Pool reserves: {} / {}", pair.reserve0(), pair.reserve1()),
    };

    on_cleanup(move || info!("cleaning up <AddLiquidity/>"));

    view! {
        <div class="flex flex-col gap-3">
            <p class="text-sm">{pool_status}</p>
            <div class="flex gap-2 items-center">
                <input
                    class="flex-1"
                    type="text"
                    inputmode="decimal"
                    placeholder="0.0"
                    prop:value=typed_a
                    on:input=move |ev| set_typed_a.set(event_target_value(&ev))
                />
                <span>{symbol_a}</span>
            </div>
            <div class="flex gap-2 items-center">
                <input
                    class="flex-1"
                    type="text"
                    inputmode="decimal"
                    placeholder="0.0"
                    disabled=has_price
                    prop:value=move || {
                        if has_price() {
                            amount_b.with(|amount| amount.as_ref().map(|b| b.to_exact()).unwrap_or_default())
                        } else {
                            typed_b.get()
                        }
                    }
                    on:input=move |ev| set_typed_b.set(event_target_value(&ev))
                />
                <span>{symbol_b}</span>
            </div>
            <ApproveButton callback=approval_a symbol=symbol_a />
            <ApproveButton callback=approval_b symbol=symbol_b />
            <button class="w-full" on:click=supply disabled=move || !can_supply()>
                "Supply"
            </button>
        </div>
    }
}
