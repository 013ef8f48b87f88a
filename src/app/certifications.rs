use leptos::{html, prelude::*};

use super::reveal::{use_in_view, Reveal};
use super::SectionHeading;
use crate::content::CERTIFICATIONS;
use crate::motion::stagger_ms;

#[component]
pub fn Certifications() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref);

    view! {
        <section id="certifications" class="py-24 relative">
            <div class="max-w-6xl mx-auto px-4 sm:px-6" node_ref=section_ref>
                <Reveal in_view>
                    <SectionHeading
                        accent="Certifications"
                        subtitle="Professional development & learning"
                    />

                    <div class="grid md:grid-cols-3 gap-6 max-w-4xl mx-auto">
                        {CERTIFICATIONS
                            .iter()
                            .enumerate()
                            .map(|(i, cert)| {
                                view! {
                                    <Reveal
                                        in_view
                                        delay_ms=stagger_ms(0, i, 150)
                                        class="glass rounded-2xl p-6 hover:glow-green hover:-translate-y-1.5 active:scale-95 group"
                                    >
                                        <div class="flex items-center justify-between mb-4">
                                            <div class="p-2.5 glass-subtle rounded-xl">
                                                <i
                                                    class=format!("{} text-[28px]", cert.icon)
                                                    style=format!("color: {}", cert.color)
                                                />
                                            </div>
                                            <span class="text-xs font-mono text-gray-500 dark:text-gray-400 glass-subtle px-2.5 py-1 rounded-full">
                                                {cert.year}
                                            </span>
                                        </div>
                                        <h3 class="font-semibold text-gray-900 dark:text-white text-sm leading-relaxed mb-3 group-hover:text-primary dark:group-hover:text-primary-dark transition-colors">
                                            {cert.title}
                                        </h3>
                                        <div class="flex items-center gap-1.5 text-gray-500 dark:text-gray-400">
                                            <i class="extra-certificate text-xs text-primary/50 dark:text-primary-dark/50" />
                                            <span class="text-xs font-medium">{cert.issuer}</span>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
