use leptos::prelude::*;
use lucide_leptos::Info;

/// An info icon that reveals `text` on hover or tap.
#[component]
pub fn QuestionHelper(text: &'static str) -> impl IntoView {
    let (show, set_show) = signal(false);

    view! {
        <span
            class="relative inline-flex items-center cursor-pointer"
            on:mouseenter=move |_| set_show.set(true)
            on:mouseleave=move |_| set_show.set(false)
            on:click=move |_| set_show.update(|show| *show = !*show)
        >
            <Info size=18 absolute_stroke_width=true />
            <Show when=move || show.get()>
                <div class="tooltip absolute right-0 top-6 z-10 w-64 p-3 text-sm rounded-lg border border-solid border-border bg-popover">
                    {text}
                </div>
            </Show>
        </span>
    }
}
