use leptos::{html, prelude::*};

use super::reveal::{use_in_view, Reveal};
use super::SectionHeading;
use crate::content::DEGREE;

#[component]
pub fn Education() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref);

    view! {
        <section id="education" class="py-24 relative">
            <div class="max-w-6xl mx-auto px-4 sm:px-6" node_ref=section_ref>
                <Reveal in_view>
                    <SectionHeading accent="Education" subtitle="My academic background" />

                    <Reveal in_view delay_ms=200 class="max-w-2xl mx-auto">
                        <div class="glass rounded-2xl p-8 hover:glow-green transition-all hover:-translate-y-1.5">
                            <div class="flex items-start gap-5">
                                <div class="relative shrink-0">
                                    <div class="absolute inset-0 bg-primary dark:bg-primary-dark rounded-xl opacity-20 blur-md" />
                                    <div class="relative p-3.5 bg-gradient-to-br from-primary/15 to-emerald-400/15 dark:from-primary-dark/15 dark:to-accent/15 rounded-xl border border-primary/10 dark:border-primary-dark/10">
                                        <i class="extra-graduation-cap text-[28px] text-primary dark:text-primary-dark" />
                                    </div>
                                </div>
                                <div>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">
                                        {DEGREE.title}
                                    </h3>
                                    <p class="text-primary dark:text-primary-dark font-medium mt-1">
                                        {DEGREE.school}
                                    </p>
                                    <p class="text-gray-500 dark:text-gray-400 text-sm mt-1">
                                        {DEGREE.location}
                                    </p>
                                    <p class="text-gray-500 dark:text-gray-400 text-sm font-mono mt-3 px-3 py-1 glass-subtle rounded-lg inline-block">
                                        {DEGREE.period}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}
