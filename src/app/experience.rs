use leptos::{html, prelude::*};

use super::reveal::{use_in_view, Reveal};
use super::SectionHeading;
use crate::content::{Job, JOBS};
use crate::motion::{stagger_ms, RevealFrom};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref);

    view! {
        <section id="experience" class="py-24 relative">
            <div class="max-w-6xl mx-auto px-4 sm:px-6" node_ref=section_ref>
                <Reveal in_view>
                    <SectionHeading lead="Work" accent="Experience" subtitle="My professional journey" />

                    <div class="relative">
                        <div class="hidden md:block absolute left-8 top-0 bottom-0 w-px bg-gradient-to-b from-primary/30 via-primary/10 to-transparent dark:from-primary-dark/30 dark:via-primary-dark/10" />

                        <div class="space-y-8">
                            {JOBS
                                .iter()
                                .enumerate()
                                .map(|(i, job)| {
                                    view! {
                                        <Reveal
                                            in_view
                                            from=RevealFrom::Left
                                            delay_ms=stagger_ms(0, i, 200)
                                            class="relative md:pl-20"
                                        >
                                            <TimelineDot />
                                            <JobCard job />
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn TimelineDot() -> impl IntoView {
    view! {
        <div class="hidden md:flex absolute left-5 top-6 w-7 h-7 rounded-full items-center justify-center z-10">
            <div class="absolute inset-0 bg-primary dark:bg-primary-dark rounded-full opacity-30 blur-sm" />
            <div class="relative w-full h-full bg-gradient-to-br from-primary to-emerald-500 dark:from-primary-dark dark:to-accent rounded-full flex items-center justify-center shadow-lg">
                <i class="extra-briefcase text-[11px] text-white dark:text-dark-bg" />
            </div>
        </div>
    }
}

#[component]
fn JobCard(job: &'static Job) -> impl IntoView {
    view! {
        <div class="glass rounded-2xl p-6 hover:glow-green transition-all hover:-translate-y-0.5">
            <div class="flex flex-wrap items-start justify-between gap-3 mb-4">
                <div>
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">{job.title}</h3>
                    <p class="text-primary dark:text-primary-dark font-medium">{job.company}</p>
                </div>
                <div class="flex items-center gap-2">
                    {job
                        .current
                        .then(|| {
                            view! {
                                <span class="px-2.5 py-0.5 bg-green-500/10 text-green-600 dark:text-primary-dark rounded-full text-xs font-semibold border border-green-500/20">
                                    "Current"
                                </span>
                            }
                        })}
                    <span class="text-sm text-gray-500 dark:text-gray-400 font-mono">
                        {job.period}
                    </span>
                </div>
            </div>

            <ul class="space-y-2.5 mb-4">
                {job
                    .points
                    .iter()
                    .map(|point| {
                        view! {
                            <li class="flex items-start gap-2 text-gray-600 dark:text-gray-300 text-sm">
                                <span class="mt-1.5 w-1.5 h-1.5 bg-primary dark:bg-primary-dark rounded-full shrink-0" />
                                {*point}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="flex flex-wrap gap-2">
                {job
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="px-3 py-1 glass-subtle rounded-full text-xs font-medium text-primary dark:text-primary-dark">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
