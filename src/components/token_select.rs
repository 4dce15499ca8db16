use crate::constants::{find_token, TOKEN_LIST};
use leptos::prelude::*;
use vexchange_sdk::Token;

#[component]
pub fn TokenSelect(selected: RwSignal<Option<Token>>) -> impl IntoView {
    view! {
        <select
            class="token-select"
            on:change=move |ev| selected.set(find_token(&event_target_value(&ev)))
        >
            <option value="" selected=move || selected.with(Option::is_none)>
                "Select a token"
            </option>
            {TOKEN_LIST
                .iter()
                .map(|token| {
                    let address = token.address;
                    let is_selected = move || {
                        selected.with(|selected| selected.as_ref().is_some_and(|t| t.address == address))
                    };
                    view! {
                        <option value=address.to_string() selected=is_selected>
                            {token.symbol.clone()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
