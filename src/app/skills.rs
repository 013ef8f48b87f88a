use leptos::{html, prelude::*};

use super::reveal::{use_in_view, Reveal};
use super::SectionHeading;
use crate::content::{TestingType, METHODOLOGIES, SKILL_CATEGORIES, TESTING_TYPES};
use crate::motion::{stagger_ms, RevealFrom};

/// Clicking the open badge closes its hint; any other badge replaces it.
fn next_hint(current: Option<TestingType>, clicked: TestingType) -> Option<TestingType> {
    match current {
        Some(open) if open.name == clicked.name => None,
        _ => Some(clicked),
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref);
    let (active_hint, set_active_hint) = signal(None::<TestingType>);

    view! {
        <section id="skills" class="py-24 relative">
            <div class="max-w-6xl mx-auto px-4 sm:px-6" node_ref=section_ref>
                <Reveal in_view>
                    <SectionHeading lead="Technical" accent="Skills" subtitle="Technologies I work with" />

                    <div class="grid md:grid-cols-3 gap-6 mb-10">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(cat_idx, category)| {
                                view! {
                                    <Reveal
                                        in_view
                                        delay_ms=stagger_ms(0, cat_idx, 150)
                                        class="glass rounded-2xl p-6 hover:glow-green hover:-translate-y-1.5"
                                    >
                                        <h3 class="text-lg font-semibold mb-5 text-primary dark:text-primary-dark">
                                            {category.title}
                                        </h3>
                                        <div class="grid grid-cols-2 gap-3">
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(i, skill)| {
                                                    view! {
                                                        <Reveal
                                                            in_view
                                                            from=RevealFrom::Scale
                                                            delay_ms=stagger_ms(0, cat_idx, 150) + stagger_ms(0, i, 50)
                                                            class="flex items-center gap-2.5 p-2.5 rounded-xl glass-subtle hover:bg-white/40 dark:hover:bg-white/5"
                                                        >
                                                            <i
                                                                class=format!("{} text-xl", skill.icon)
                                                                style=format!("color: {}", skill.color)
                                                            />
                                                            <span class="text-sm font-medium text-gray-700 dark:text-gray-300">
                                                                {skill.name}
                                                            </span>
                                                        </Reveal>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Reveal in_view delay_ms=500 class="glass rounded-2xl p-6">
                        <h3 class="text-lg font-semibold mb-1 text-center">"Testing Expertise"</h3>
                        <p class="text-xs text-gray-400 dark:text-gray-500 text-center mb-4">
                            "Click any badge to learn more"
                        </p>
                        <div class="flex flex-wrap justify-center gap-3">
                            {TESTING_TYPES
                                .into_iter()
                                .map(|kind| {
                                    let selected = move || {
                                        active_hint.get().is_some_and(|h| h.name == kind.name)
                                    };
                                    view! {
                                        <button
                                            on:click=move |_| {
                                                set_active_hint.update(|h| *h = next_hint(*h, kind))
                                            }
                                            class=move || {
                                                if selected() {
                                                    "px-4 py-2 rounded-full text-sm font-medium transition-all cursor-pointer border hover:scale-105 active:scale-95 bg-primary dark:bg-primary-dark text-white dark:text-dark-bg border-primary dark:border-primary-dark glow-green"
                                                } else {
                                                    "px-4 py-2 rounded-full text-sm font-medium transition-all cursor-pointer border hover:scale-105 active:scale-95 glass-subtle text-primary dark:text-primary-dark border-transparent hover:glow-green"
                                                }
                                            }
                                        >
                                            {kind.name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    {move || {
                        active_hint
                            .get()
                            .map(|hint| {
                                view! {
                                    <div
                                        class="fixed inset-0 z-50 flex items-center justify-center p-4"
                                        on:click=move |_| set_active_hint.set(None)
                                    >
                                        <div class="absolute inset-0 bg-black/30 backdrop-blur-sm" />
                                        <div
                                            class="relative glass-strong rounded-2xl p-6 max-w-sm w-full shadow-2xl border border-primary/20 dark:border-primary-dark/20"
                                            on:click=|ev| ev.stop_propagation()
                                        >
                                            <button
                                                on:click=move |_| set_active_hint.set(None)
                                                class="absolute top-3 right-3 w-7 h-7 flex items-center justify-center rounded-full glass-subtle text-gray-400 hover:text-gray-600 dark:hover:text-gray-200 transition-colors text-lg"
                                                aria-label="Close"
                                            >
                                                "×"
                                            </button>
                                            <div class="flex items-center gap-3 mb-3">
                                                <div class="w-2 h-2 rounded-full bg-primary dark:bg-primary-dark" />
                                                <h4 class="font-bold text-gray-900 dark:text-white">
                                                    {hint.name}
                                                </h4>
                                            </div>
                                            <p class="text-gray-600 dark:text-gray-300 text-sm leading-relaxed">
                                                {hint.hint}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                    }}

                    <Reveal in_view from=RevealFrom::Fade delay_ms=700>
                        <div class="flex flex-wrap justify-center gap-3 mt-6">
                            {METHODOLOGIES
                                .iter()
                                .map(|method| {
                                    view! {
                                        <span class="px-4 py-2 glass-subtle rounded-full text-sm font-medium text-gray-700 dark:text-gray-300">
                                            {*method}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_hint_toggles() {
        let [functional, regression, ..] = TESTING_TYPES;

        let open = next_hint(None, functional);
        assert_eq!(open, Some(functional));

        // another badge replaces the open hint
        let open = next_hint(open, regression);
        assert_eq!(open, Some(regression));

        // clicking the open badge closes it
        assert_eq!(next_hint(open, regression), None);
    }
}
