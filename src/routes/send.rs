use crate::{
    components::TokenSelect,
    constants::CHAIN_ID,
    state::{TransactionInfo, TransactionRecorder, Transactions, WalletSignals},
    support::{clause, submit_transaction, ConnexClient, TransactionSigner},
    utils::{alert, shorten_address},
    Error,
};
use alloy_primitives::Address;
use connex::Clause;
use leptos::{prelude::*, task::spawn_local};
use tracing::info;
use vexchange_sdk::{addrs::vvet, contract_interfaces::erc20::IERC20, TokenAmount};

/// A transfer of `amount` to `recipient`. VVET goes out as plain VET.
pub fn transfer_clause(amount: &TokenAmount, recipient: Address) -> Clause {
    if amount.token == vvet(amount.token.chain_id) {
        return Clause {
            to: Some(recipient.to_checksum(None)),
            value: format!("0x{:x}", amount.raw),
            data: "0x".to_string(),
        };
    }

    clause(
        amount.token.address,
        &IERC20::transferCall {
            to: recipient,
            amount: amount.raw,
        },
    )
}

pub async fn submit_send<S, T>(
    signer: &S,
    recorder: &T,
    amount: &TokenAmount,
    recipient: Address,
) -> Result<(), Error>
where
    S: TransactionSigner + ?Sized,
    T: TransactionRecorder + ?Sized,
{
    let summary = format!(
        "Send {} {} to {}",
        amount.to_fixed(4),
        amount.token.symbol,
        shorten_address(&recipient)
    );

    submit_transaction(
        signer,
        recorder,
        vec![transfer_clause(amount, recipient)],
        "send",
        TransactionInfo {
            summary: Some(summary),
            approval_of_token: None,
        },
    )
    .await
    .map(|_| ())
}

#[component]
pub fn SendTokens() -> impl IntoView {
    info!("rendering <SendTokens/>");

    let wallet = use_context::<WalletSignals>().expect("wallet context missing!");
    let transactions = use_context::<Transactions>().expect("transactions context missing!");

    let token = RwSignal::new(Some(vvet(CHAIN_ID)));
    let (typed_value, set_typed_value) = signal(String::new());
    let (recipient, set_recipient) = signal(String::new());

    let parsed_amount = Memo::new(move |_| {
        TokenAmount::parse(token.get()?, typed_value.get())
            .ok()
            .filter(|amount| !amount.is_zero())
    });
    let parsed_recipient = Memo::new(move |_| recipient.with(|r| r.trim().parse::<Address>().ok()));

    let error_message = move || {
        if !wallet.is_connected() {
            Some("Connect a wallet")
        } else if parsed_amount.with(Option::is_none) {
            Some("Enter an amount")
        } else if parsed_recipient.with(Option::is_none) {
            Some("Enter a valid recipient")
        } else {
            None
        }
    };

    let send = move |_| {
        let (Some(amount), Some(recipient)) =
            (parsed_amount.get_untracked(), parsed_recipient.get_untracked())
        else {
            return;
        };

        spawn_local(async move {
            match submit_send(&ConnexClient, &transactions, &amount, recipient).await {
                Ok(()) => set_typed_value.set(String::new()),
                Err(error) => alert(error.to_string()),
            }
        });
    };

    on_cleanup(move || info!("cleaning up <SendTokens/>"));

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
                <TokenSelect selected=token />
            </div>
            <input
                type="text"
                placeholder="Recipient address"
                prop:value=recipient
                on:input=move |ev| set_recipient.set(event_target_value(&ev))
            />
            <button class="w-full" on:click=send disabled=move || error_message().is_some()>
                {move || error_message().unwrap_or("Send")}
            </button>
        </div>
    }
}
