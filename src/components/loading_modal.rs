use leptos::{html::Dialog, prelude::*};
use lucide_leptos::LoaderCircle;

#[component]
pub fn LoadingModal(when: Memo<bool>, #[prop(into)] message: String) -> impl IntoView {
    let dialog_ref = NodeRef::<Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            match when.get() {
                true => {
                    let _ = dialog.show_modal();
                }
                false => dialog.close(),
            }
        }
    });

    view! {
        <dialog node_ref=dialog_ref>
            // keeps the focus ring off the spinner
            <div tabindex="0"></div>
            <div class="align-middle inline-flex items-center justify-center gap-3">
                <span class="animate-spin inline-flex">
                    <LoaderCircle size=28 />
                </span>
                <div class="font-bold">{message}</div>
            </div>
        </dialog>
    }
}
