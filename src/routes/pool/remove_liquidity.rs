use crate::{
    constants::find_token,
    data::{use_pair, PairState},
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};
use tracing::info;

/// Shows the pool a position would be withdrawn from.
#[component]
pub fn RemoveLiquidity() -> impl IntoView {
    info!("rendering <RemoveLiquidity/>");

    let params = use_params_map();
    let token_a = Signal::derive(move || params.read().get("token_a").and_then(|a| find_token(&a)));
    let token_b = Signal::derive(move || params.read().get("token_b").and_then(|b| find_token(&b)));

    let pair = use_pair(token_a, token_b);

    let add_link = move || {
        params.with(|params| {
            format!(
                "/add/{}/{}",
                params.get("token_a").unwrap_or_default(),
                params.get("token_b").unwrap_or_default()
            )
        })
    };

    let summary = move || match pair.get() {
        PairState::Loading => "Loading pool...".to_string(),
        PairState::NotExists => "This pool does not exist yet.".to_string(),
        PairState::Failed(error) => format!("Unable to load the pool: {error}"),
        PairState::Exists(pair) => format!(
            "Pooled {}: {}\nPooled {}: {}",
            pair.token0(),
            pair.reserve0().to_fixed(6),
            pair.token1(),
            pair.reserve1().to_fixed(6)
        ),
    };

    on_cleanup(move || info!("cleaning up <RemoveLiquidity/>"));

    view! {
        <div class="flex flex-col gap-3">
            <p class="text-sm whitespace-pre-line">{summary}</p>
            <A href=add_link>"Add liquidity instead"</A>
        </div>
    }
}
