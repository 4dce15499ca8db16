use alloy_primitives::Address;
use connex::Connex;
use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router_macro::path;
use lucide_leptos::{ExternalLink, History, Moon, Sun, Wallet};
use tracing::{debug, error, info, warn};

mod components;
mod constants;
mod data;
mod error;
mod hooks;
mod routes;
mod state;
mod support;
mod utils;

use components::{default_tabs, LoadingModal, NavigationTabs};
use constants::{CHAIN_ID, EXPLORER};
use routes::{
    pool::{AddLiquidity, Pool, PoolFinder, RemoveLiquidity},
    send::SendTokens,
    swap::Swap,
};
use state::{Chain, TransactionUpdater, Transactions, UserSettings, WalletSignals};
use utils::{alert, shorten_address};

pub use error::Error;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(Chain::new(CHAIN_ID));
    provide_context(WalletSignals::new());
    provide_context(UserSettings::new());
    provide_context(Transactions::new());

    let chain = use_context::<Chain>().expect("chain context missing!");
    let wallet = use_context::<WalletSignals>().expect("wallet context missing!");
    let settings = use_context::<UserSettings>().expect("user settings context missing!");
    let transactions = use_context::<Transactions>().expect("transactions context missing!");

    Effect::new(move |_| info!("Chain ID set to {}", chain.get()));
    Effect::new(move |_| debug!("Account: {:?}", wallet.account.get()));

    Effect::new(move |_| {
        let dark = settings.dark_mode.get();
        if let Some(root) = document().document_element() {
            if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
                warn!("unable to apply theme: {e:?}");
            }
        }
    });

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    // Actions

    let connect_action: Action<(), bool, SyncStorage> =
        Action::new_unsync_with_value(Some(false), move |_: &()| async move {
            if !Connex::is_available() {
                alert("No VeChain wallet found. Please install Sync2 or VeWorld.");
                return false;
            }

            debug!("Requesting identification certificate...");
            let signer = Connex::sign_cert("Connect to Vexchange")
                .await
                .map_err(Error::from)
                .and_then(|cert| {
                    cert.annex
                        .signer
                        .parse::<Address>()
                        .map_err(Error::from)
                });

            match signer {
                Ok(address) => {
                    info!("Connected as {address}");
                    wallet.account.set(Some(address));
                    true
                }
                Err(e) => {
                    error!("{e}");
                    false
                }
            }
        });

    // on:click handlers

    let connect = move |_: MouseEvent| {
        connect_action.dispatch(());
    };

    let disconnect = move |_: MouseEvent| {
        wallet.account.set(None);
    };

    let account_link = move || {
        wallet
            .account
            .get()
            .map(|account| format!("{EXPLORER}/accounts/{account}"))
    };

    view! {
        <Title text="Vexchange" />
        <Router>
            <header class="bg-background z-40">
                <div class="p-4 flex justify-between items-center border-b">
                    <div class="font-bold text-2xl cursor-default">"Vexchange"</div>
                    <div class="flex gap-2 items-center">
                        <Show when=move || { transactions.pending_count() > 0 }>
                            <span class="inline-flex gap-1 items-center text-sm">
                                <History size=16 />
                                {move || format!("{} pending", transactions.pending_count())}
                            </span>
                        </Show>
                        <button
                            on:click=move |_| settings.toggle_dark_mode()
                            class="p-2 border-none bg-secondary rounded-md"
                        >
                            <Show when=move || settings.dark_mode.get() fallback=|| view! { <Moon size=16 /> }>
                                <Sun size=16 />
                            </Show>
                        </button>
                        <Show
                            when=move || wallet.is_connected()
                            fallback=move || {
                                view! {
                                    <button
                                        on:click=connect
                                        disabled=connect_action.pending()
                                        class="min-w-24 text-sm font-medium py-2 px-4 border-none
                                        bg-primary text-primary-foreground rounded-md"
                                    >
                                        <div class="h-6 flex flex-row items-center gap-2">
                                            <Wallet size=16 />
                                            "Connect Wallet"
                                        </div>
                                    </button>
                                }
                            }
                        >
                            <a
                                href=account_link
                                target="_blank"
                                rel="noopener"
                                class="inline-flex gap-1 items-center text-sm"
                            >
                                {move || wallet.account.get().map(|account| shorten_address(&account))}
                                <ExternalLink size=14 />
                            </a>
                            <button
                                on:click=disconnect
                                class="text-sm py-2 px-3 border-none bg-secondary rounded-md"
                            >
                                "Disconnect"
                            </button>
                        </Show>
                    </div>
                </div>
            </header>
            <main class="max-w-md mx-auto px-2.5 py-3">
                <NavigationTabs tabs=default_tabs() />
                <SettingsPanel />
                <Routes fallback=|| "This page could not be found.">
                    <Route path=path!("/") view=|| view! { <Redirect path="/swap" /> } />
                    <Route path=path!("/swap") view=Swap />
                    <Route path=path!("/send") view=SendTokens />
                    <Route path=path!("/pool") view=Pool />
                    <Route path=path!("/find") view=|| view! { <PoolFinder /> } />
                    <Route path=path!("/create") view=|| view! { <PoolFinder creating=true /> } />
                    <Route path=path!("/add/:token_a/:token_b") view=AddLiquidity />
                    <Route path=path!("/remove/:token_a/:token_b") view=RemoveLiquidity />
                </Routes>
            </main>
            <TransactionUpdater />
            <LoadingModal when=connect_action.pending() message="Requesting Connection" />
        </Router>
    }
}

/// Slippage tolerance and transaction deadline.
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let settings = use_context::<UserSettings>().expect("user settings context missing!");

    view! {
        <details class="my-2 text-sm">
            <summary>"Settings"</summary>
            <label class="flex justify-between items-center gap-2">
                "Slippage tolerance (bips)"
                <input
                    type="number"
                    min="0"
                    max="5000"
                    prop:value=move || settings.slippage.get().to_string()
                    on:change=move |ev| {
                        if let Ok(bips) = event_target_value(&ev).parse::<u16>() {
                            settings.slippage.set(bips.min(5000));
                        }
                    }
                />
            </label>
            <label class="flex justify-between items-center gap-2">
                "Transaction deadline (minutes)"
                <input
                    type="number"
                    min="1"
                    prop:value=move || settings.deadline.get().to_string()
                    on:change=move |ev| {
                        if let Ok(minutes) = event_target_value(&ev).parse::<u64>() {
                            settings.deadline.set(minutes.max(1));
                        }
                    }
                />
            </label>
        </details>
    }
}
