use leptos::prelude::*;
use tracing_subscriber_wasm::MakeConsoleWriter;
use vexchange_interface::App;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .with_max_level(tracing::Level::DEBUG)
        // wasm has no system clock
        .without_time()
        .with_ansi(false)
        .init();

    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App /> })
}
