use crate::{
    components::TokenSelect,
    data::{query_tokens, use_pair, PairState},
};
use leptos::{either::EitherOf4, prelude::*};
use leptos_router::components::A;
use tracing::info;
use vexchange_sdk::Token;

fn liquidity_path(action: &str, token_a: &Token, token_b: &Token) -> String {
    format!("/{action}/{}/{}", token_a.address, token_b.address)
}

/// Looks up the pool for two tokens. With `creating`, an existing pool is
/// reported as such instead of being offered for import.
#[component]
pub fn PoolFinder(#[prop(optional)] creating: bool) -> impl IntoView {
    info!("rendering <PoolFinder/>");

    let token_a = RwSignal::new(None::<Token>);
    let token_b = RwSignal::new(None::<Token>);

    let pair = use_pair(token_a.into(), token_b.into());
    let tokens = Memo::new(move |_| query_tokens(token_a.get(), token_b.get()));

    on_cleanup(move || info!("cleaning up <PoolFinder/>"));

    let result = move || {
        let Some((a, b)) = tokens.get() else {
            return EitherOf4::A(view! { <p>"Select two different tokens to find a pool."</p> });
        };

        match pair.get() {
            PairState::Loading => EitherOf4::A(view! { <p>"Loading..."</p> }),
            PairState::NotExists => EitherOf4::B(view! {
                <p>"No pool found."</p>
                <A href=liquidity_path("add", &a, &b)>"Create pool"</A>
            }),
            PairState::Failed(error) => EitherOf4::C(view! {
                <p class="text-red-500">{format!("Unable to load the pool: {error}")}</p>
            }),
            PairState::Exists(pair) => EitherOf4::D(view! {
                <p>
                    {if creating { "Pool already exists!" } else { "Pool found!" }}
                </p>
                <p class="text-sm">
                    {format!("{} / {}", pair.reserve0(), pair.reserve1())}
                </p>
                <div class="flex gap-2">
                    <A href=liquidity_path("add", &a, &b)>"Add liquidity"</A>
                    <A href=liquidity_path("remove", &a, &b)>"Remove liquidity"</A>
                </div>
            }),
        }
    };

    view! {
        <div class="flex flex-col gap-3">
            <TokenSelect selected=token_a />
            <TokenSelect selected=token_b />
            {result}
        </div>
    }
}
