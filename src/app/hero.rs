use leptos::prelude::*;

use super::scroll_to;
use crate::content::{PROFILE, SOCIAL_LINKS};

#[component]
pub fn Hero() -> impl IntoView {
    // the hero is on screen at load, so it animates in on mount instead of
    // waiting for the intersection observer
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let enter = move |delay_ms: u32| {
        (
            move || {
                if mounted.get() {
                    "transition-all duration-500 ease-out opacity-100 translate-y-0"
                } else {
                    "transition-all duration-500 ease-out opacity-0 translate-y-5"
                }
            },
            format!("transition-delay: {delay_ms}ms"),
        )
    };
    let (greeting_class, greeting_style) = enter(200);
    let (name_class, name_style) = enter(300);
    let (roles_class, roles_style) = enter(400);
    let (tagline_class, tagline_style) = enter(500);
    let (cta_class, cta_style) = enter(600);
    let (social_class, social_style) = enter(700);

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative pt-16">
            <div class="absolute inset-0 -z-10 overflow-hidden">
                <div class="absolute top-32 left-1/4 w-64 h-64 bg-green-400/20 dark:bg-green-400/10 rounded-full blur-3xl animate-pulse" />
                <div class="absolute bottom-32 right-1/4 w-80 h-80 bg-emerald-300/15 dark:bg-emerald-400/5 rounded-full blur-3xl" />
            </div>

            <div class="max-w-6xl mx-auto px-4 sm:px-6 py-20">
                <div class="text-center">
                    <div class=move || {
                        if mounted.get() {
                            "relative w-36 h-36 mx-auto mb-8 transition-transform duration-700 scale-100 rotate-0"
                        } else {
                            "relative w-36 h-36 mx-auto mb-8 transition-transform duration-700 scale-0 -rotate-180"
                        }
                    }>
                        <div class="absolute inset-0 rounded-full bg-gradient-to-br from-primary via-emerald-400 to-accent opacity-80 blur-md animate-pulse" />
                        <div class="relative w-full h-full rounded-full bg-gradient-to-br from-primary to-accent flex items-center justify-center text-white text-4xl font-bold shadow-2xl ring-4 ring-white/30 dark:ring-white/10">
                            {PROFILE.initials}
                        </div>
                    </div>

                    <p
                        class=greeting_class
                        style=greeting_style
                    >
                        <span class="block text-primary dark:text-primary-dark font-mono text-sm mb-3 tracking-wider">
                            "< Hello World />"
                        </span>
                    </p>

                    <h1 class=name_class style=name_style>
                        <span class="block text-4xl sm:text-5xl md:text-6xl font-bold mb-4">
                            {PROFILE.first_name}
                            " "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-emerald-400 dark:from-primary-dark dark:to-accent">
                                {PROFILE.last_name}
                            </span>
                        </span>
                    </h1>

                    <div class=roles_class style=roles_style>
                        <div class="flex flex-wrap justify-center gap-3 mb-6">
                            <span class="px-4 py-1.5 glass rounded-full text-sm font-medium text-primary dark:text-primary-dark glow-green">
                                {PROFILE.roles[0]}
                            </span>
                            <span class="px-4 py-1.5 glass rounded-full text-sm font-medium text-emerald-700 dark:text-accent">
                                {PROFILE.roles[1]}
                            </span>
                        </div>
                    </div>

                    <p class=tagline_class style=tagline_style>
                        <span class="block text-gray-600 dark:text-gray-400 text-lg max-w-2xl mx-auto mb-8 leading-relaxed">
                            "QA Test Engineer with expertise in "
                            <span class="text-primary dark:text-primary-dark font-semibold">
                                "Playwright automation"
                            </span>
                            " and a strong background in "
                            <span class="text-primary dark:text-primary-dark font-semibold">
                                "React.js development"
                            </span>
                            ". Building quality software through comprehensive testing and clean code."
                        </span>
                    </p>

                    <div class=cta_class style=cta_style>
                        <div class="flex flex-wrap justify-center gap-4 mb-10">
                            <a
                                href="#contact"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to("contact");
                                }
                                class="px-7 py-3 bg-gradient-to-r from-primary to-emerald-500 dark:from-primary-dark dark:to-emerald-400 text-white dark:text-dark-bg rounded-2xl font-semibold hover:shadow-xl hover:shadow-green-500/25 transition-all hover:-translate-y-0.5"
                            >
                                "Get In Touch"
                            </a>
                            <a
                                href="#experience"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to("experience");
                                }
                                class="px-7 py-3 glass rounded-2xl font-semibold text-primary dark:text-primary-dark hover:glow-green transition-all hover:-translate-y-0.5"
                            >
                                "View My Work"
                            </a>
                        </div>
                    </div>

                    <div class=social_class style=social_style>
                        <div class="flex justify-center gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    let external = social.link.is_external();
                                    view! {
                                        <a
                                            href=social.link.href()
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="p-3.5 glass rounded-2xl text-gray-600 dark:text-gray-300 hover:text-primary dark:hover:text-primary-dark transition-all hover:-translate-y-1 hover:glow-green"
                                            aria-label=social.label
                                        >
                                            <i class=format!("{} text-xl", social.icon) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            // scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <div class="w-6 h-10 glass rounded-full flex items-start justify-center p-1.5 animate-bounce">
                    <div class="w-1.5 h-3 bg-primary dark:bg-primary-dark rounded-full" />
                </div>
            </div>
        </section>
    }
}
