use crate::{
    hooks::{ApprovalState, ApproveCallback},
    utils::alert,
};
use leptos::{prelude::*, task::spawn_local};

/// Shown only while an approval is missing or on its way.
#[component]
pub fn ApproveButton(callback: ApproveCallback, #[prop(into)] symbol: Signal<String>) -> impl IntoView {
    let needs_attention = move || {
        matches!(
            callback.state.get(),
            ApprovalState::NotApproved | ApprovalState::Pending
        )
    };
    let disabled = move || {
        callback.state.get() == ApprovalState::Pending || callback.submitting.get()
    };

    let approve = move |_| {
        spawn_local(async move {
            if let Err(error) = callback.approve().await {
                alert(error.to_string());
            }
        });
    };

    view! {
        <Show when=needs_attention>
            <button class="w-full" on:click=approve disabled=disabled>
                {move || match callback.state.get() {
                    ApprovalState::Pending => format!("Approving {}...", symbol.get()),
                    _ => format!("Approve {}", symbol.get()),
                }}
            </button>
        </Show>
    }
}
