use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{reveal_class, RevealFrom};

/// Flips to `true` the first time `target` scrolls into view and stays
/// there. On the server this never fires, so content renders in its
/// hidden pose until hydration.
pub fn use_in_view(target: NodeRef<html::Div>) -> Signal<bool> {
    let (in_view, set_in_view) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                set_in_view.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin("-100px"),
    );

    in_view.into()
}

/// Wraps children in a block that transitions from `from` to its resting
/// pose once `in_view` turns true.
#[component]
pub fn Reveal(
    in_view: Signal<bool>,
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || format!("{} {}", reveal_class(in_view.get(), from), class)
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
