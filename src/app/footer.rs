use leptos::prelude::*;

use crate::content::{copyright_year, BUILD_TIME, PROFILE, SOCIAL_LINKS};

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="relative w-9 h-9 shrink-0">
            <div
                class="absolute -inset-0.5 rounded-full spin-slow"
                style="background: conic-gradient(from 0deg, #16a34a, #4ade80, #a3e635, #16a34a)"
            />
            <div class="absolute inset-0 rounded-full bg-white dark:bg-dark-bg" />
            <div class="relative w-full h-full rounded-full overflow-hidden">
                <img
                    src="/image.webp"
                    alt=PROFILE.first_name
                    width="36"
                    height="36"
                    class="w-full h-full object-cover object-top"
                />
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    // year of the build, not of the visit; it only advances on redeploy
    let year = copyright_year(BUILD_TIME)
        .map(|y| format!("{y} "))
        .unwrap_or_default();

    view! {
        <footer class="relative mt-10">
            <div class="glass-strong rounded-t-3xl">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 py-10">
                    <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                        <div class="flex items-center gap-3">
                            <Logo />
                            <div>
                                <p class="text-lg font-bold text-gray-900 dark:text-white mb-1">
                                    {PROFILE.full_name()}
                                </p>
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    {PROFILE.headline()}
                                </p>
                            </div>
                        </div>

                        <div class="flex justify-center md:justify-end gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    let external = social.link.is_external();
                                    view! {
                                        <a
                                            href=social.link.href()
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="p-2.5 glass-subtle rounded-xl text-gray-500 dark:text-gray-400 hover:text-primary dark:hover:text-primary-dark hover:glow-green transition-all"
                                            aria-label=social.label
                                        >
                                            <i class=social.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="border-t border-gray-200/50 dark:border-white/5 mt-8 pt-6 text-center">
                        <p class="text-sm text-gray-400 dark:text-gray-500">
                            {format!("© {year}{}. All rights reserved.", PROFILE.full_name())}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
