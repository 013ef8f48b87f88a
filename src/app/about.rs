use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn_with_options, UseIntervalFnOptions};

use super::reveal::{use_in_view, Reveal};
use super::SectionHeading;
use crate::content::{HIGHLIGHTS, PROFILE, STATS};
use crate::motion::{ease_out_value, parse_stat, stagger_ms, RevealFrom};

const COUNTER_FRAMES: u32 = 60;
const COUNTER_TICK_MS: u64 = 16;

/// Counts up to the numeric part of `value` once `in_view` turns true.
#[component]
fn AnimatedCounter(value: &'static str, in_view: Signal<bool>) -> impl IntoView {
    let Some((target, suffix)) = parse_stat(value) else {
        return value.into_any();
    };

    let (frame, set_frame) = signal(0_u32);
    let counter = use_interval_fn_with_options(
        move || {
            set_frame.update(|f| *f += 1);
        },
        COUNTER_TICK_MS,
        UseIntervalFnOptions::default().immediate(false),
    );

    let resume = counter.resume.clone();
    Effect::watch(
        move || in_view.get(),
        move |visible, _, _| {
            if *visible {
                resume();
            }
        },
        false,
    );
    let pause = counter.pause.clone();
    Effect::new(move |_| {
        if frame.get() >= COUNTER_FRAMES {
            pause();
        }
    });

    view! {
        <span>
            {move || format!("{}{}", ease_out_value(target, frame.get(), COUNTER_FRAMES), suffix)}
        </span>
    }
    .into_any()
}

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref);

    view! {
        <section id="about" class="py-24 relative">
            <div class="max-w-6xl mx-auto px-4 sm:px-6" node_ref=section_ref>
                <Reveal in_view>
                    <SectionHeading lead="About" accent="Me" subtitle="Get to know me better" />

                    <div class="grid md:grid-cols-2 gap-12 items-start">
                        <div class="grid grid-cols-2 gap-4">
                            {STATS
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        <Reveal
                                            in_view
                                            from=RevealFrom::Scale
                                            delay_ms=stagger_ms(100, i, 100)
                                            class="glass rounded-2xl p-6 text-center hover:glow-green hover:-translate-y-1.5 cursor-default"
                                        >
                                            <p class="text-3xl font-bold text-transparent bg-clip-text bg-gradient-to-br from-primary to-emerald-400 dark:from-primary-dark dark:to-accent">
                                                <AnimatedCounter value=stat.value in_view />
                                            </p>
                                            <p class="text-gray-600 dark:text-gray-400 text-sm mt-1">
                                                {stat.label}
                                            </p>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div>
                            <p class="text-gray-600 dark:text-gray-300 leading-relaxed mb-6">
                                "I'm a " <strong>{PROFILE.roles[0]}</strong>
                                " currently working at " <strong>{PROFILE.company}</strong>
                                " on a US-based financial services project. With a background in front-end development using React.js, I bring a unique perspective to quality assurance - understanding both how applications are built and how they should be tested."
                            </p>
                            <div class="space-y-3">
                                {HIGHLIGHTS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        view! {
                                            <Reveal
                                                in_view
                                                from=RevealFrom::Right
                                                delay_ms=stagger_ms(300, i, 100)
                                                class="flex items-start gap-3 p-2 rounded-xl hover:bg-white/30 dark:hover:bg-white/5"
                                            >
                                                <i class="extra-check-circle text-primary dark:text-primary-dark mt-1 shrink-0" />
                                                <span class="text-gray-600 dark:text-gray-300 text-sm">
                                                    {*item}
                                                </span>
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
