use leptos::{ev, prelude::*};
use web_sys::{wasm_bindgen::JsCast, Element, KeyboardEvent};

/// Only keys pressed while nothing in particular has focus count.
fn should_handle(key: &str, target_key: &str, target_tag: Option<&str>) -> bool {
    key == target_key && target_tag.is_some_and(|tag| tag.eq_ignore_ascii_case("body"))
}

/// Runs `on_key_down` when `key` is pressed and the event targets `<body>`.
///
/// The listener is removed when the owning component is cleaned up.
pub fn use_body_key_down(key: &'static str, on_key_down: impl Fn() + 'static) {
    let handle = window_event_listener(ev::keydown, move |event: KeyboardEvent| {
        let tag = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.tag_name());

        if should_handle(&event.key(), key, tag.as_deref()) {
            on_key_down();
        }
    });

    on_cleanup(move || handle.remove());
}
