use leptos::prelude::*;
use leptos_router::components::A;
use lucide_leptos::Plus;
use tracing::info;

mod add_liquidity;
mod pool_finder;
mod remove_liquidity;

pub use add_liquidity::AddLiquidity;
pub use pool_finder::PoolFinder;
pub use remove_liquidity::RemoveLiquidity;

#[component]
pub fn Pool() -> impl IntoView {
    info!("rendering <Pool/>");

    on_cleanup(move || {
        info!("cleaning up <Pool/>");
    });

    view! {
        <div class="flex flex-col gap-3">
            <A href="/create">
                <button class="w-full inline-flex gap-2 justify-center items-center">
                    <Plus size=16 absolute_stroke_width=true />
                    "Create a pool"
                </button>
            </A>
            <p class="text-sm text-muted-foreground">
                "Don't see a pool you joined? "
                <A href="/find">"Import it."</A>
            </p>
        </div>
    }
}
