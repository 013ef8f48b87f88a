use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::scroll_to;
use crate::content::{NavLink, NAV_LINKS, PROFILE};
use crate::motion::SCROLLED_THRESHOLD;
#[cfg(feature = "hydrate")]
use crate::content::section_ids;
#[cfg(feature = "hydrate")]
use crate::motion::{active_section, scroll_progress};
use crate::theme::Theme;

#[component]
pub fn Navbar(theme: ReadSignal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (active, set_active) = signal("home");
    let (progress, set_progress) = signal(0.0_f64);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_THRESHOLD;

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let y = scroll_y.get();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let doc_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        set_progress.set(scroll_progress(y, doc_height, viewport));

        let tops = section_ids()
            .map(|id| {
                let top = document()
                    .get_element_by_id(id)
                    .map(|el| el.get_bounding_client_rect().top());
                (id, top)
            })
            .collect::<Vec<_>>();
        if let Some(id) = active_section(&tops) {
            set_active.set(id);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_active, set_progress);

    let go_to = move |link: NavLink| {
        scroll_to(link.section_id());
        set_is_open.set(false);
    };

    let theme_icon = move || {
        if theme.get().is_dark() {
            view! { <i class="extra-sun" /> }.into_any()
        } else {
            view! { <i class="extra-moon" /> }.into_any()
        }
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 {}",
                if scrolled() { "glass-strong shadow-lg" } else { "bg-transparent" },
            )
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="#home"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(NAV_LINKS[0]);
                        }
                        class="shrink-0 relative transition-transform hover:scale-110 hover:rotate-6 active:scale-90"
                    >
                        <div
                            class="absolute -inset-0.5 rounded-xl spin-slow opacity-90"
                            style="background: conic-gradient(from 0deg, #16a34a, #4ade80, #a3e635, #16a34a)"
                        />
                        <div class="relative w-9 h-9 rounded-xl bg-gradient-to-br from-primary to-emerald-500 dark:from-primary-dark dark:to-accent flex items-center justify-center shadow-md">
                            <span class="text-white dark:text-dark-bg text-sm font-bold tracking-tight animate-pulse">
                                {PROFILE.initials}
                            </span>
                        </div>
                    </a>

                    <div class="hidden md:flex items-center gap-1">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go_to(link);
                                        }
                                        class=move || {
                                            if active.get() == link.section_id() {
                                                "px-3 py-2 rounded-xl text-sm font-medium transition-all duration-300 text-primary dark:text-primary-dark glass glow-green"
                                            } else {
                                                "px-3 py-2 rounded-xl text-sm font-medium transition-all duration-300 text-gray-600 dark:text-gray-300 hover:text-primary dark:hover:text-primary-dark hover:bg-white/30 dark:hover:bg-white/5"
                                            }
                                        }
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=move |_| on_toggle.run(())
                            class="ml-2 p-2.5 rounded-xl glass text-gray-600 dark:text-gray-300 hover:text-primary dark:hover:text-primary-dark transition-all"
                            aria-label="Toggle dark mode"
                        >
                            {theme_icon}
                        </button>
                    </div>

                    <div class="flex md:hidden items-center gap-2">
                        <button
                            on:click=move |_| on_toggle.run(())
                            class="p-2 rounded-xl glass text-gray-600 dark:text-gray-300"
                            aria-label="Toggle dark mode"
                        >
                            {theme_icon}
                        </button>
                        <button
                            on:click=move |_| set_is_open.update(|open| *open = !*open)
                            class="p-2 rounded-xl glass text-gray-600 dark:text-gray-300"
                            aria-label="Toggle menu"
                        >
                            {move || {
                                if is_open.get() {
                                    view! { <i class="extra-close text-xl" /> }.into_any()
                                } else {
                                    view! { <i class="extra-menu text-xl" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <div
                class="absolute bottom-0 left-0 h-0.5 bg-gradient-to-r from-primary via-emerald-400 to-accent transition-all duration-150"
                style=move || format!("width: {}%", progress.get())
            />

            <Show when=move || is_open.get()>
                <div class="md:hidden glass-strong">
                    <div class="px-4 py-3 space-y-1">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go_to(link);
                                        }
                                        class=move || {
                                            if active.get() == link.section_id() {
                                                "block px-3 py-2 rounded-xl text-sm font-medium transition-all text-primary dark:text-primary-dark glass"
                                            } else {
                                                "block px-3 py-2 rounded-xl text-sm font-medium transition-all text-gray-600 dark:text-gray-300 hover:bg-white/30 dark:hover:bg-white/5"
                                            }
                                        }
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
