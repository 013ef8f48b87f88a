use std::time::Duration;

use leptos::{html, prelude::*};

use super::reveal::{use_in_view, Reveal};
use super::SectionHeading;
use crate::content::{ContactForm, ContactLink, CONTACT_LINKS};
use crate::motion::{stagger_ms, RevealFrom};

const SUBMITTED_NOTICE: Duration = Duration::from_secs(3);

const INPUT_CLASS: &str = "w-full px-4 py-2.5 rounded-xl glass-subtle text-gray-900 dark:text-white focus:ring-2 focus:ring-primary/50 dark:focus:ring-primary-dark/50 outline-none transition-all text-sm placeholder-gray-400 dark:placeholder-gray-500";
const LABEL_CLASS: &str =
    "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1.5";

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref);

    view! {
        <section id="contact" class="py-24 relative">
            <div class="absolute bottom-0 left-1/2 -translate-x-1/2 w-96 h-96 bg-green-400/10 dark:bg-green-400/5 rounded-full blur-3xl -z-10" />

            <div class="max-w-6xl mx-auto px-4 sm:px-6" node_ref=section_ref>
                <Reveal in_view>
                    <SectionHeading
                        lead="Get In"
                        accent="Touch"
                        subtitle="I'm open to new opportunities. Let's connect!"
                    />

                    <div class="grid md:grid-cols-2 gap-10 max-w-4xl mx-auto">
                        <div class="space-y-6">
                            <p class="text-gray-600 dark:text-gray-300 leading-relaxed">
                                "Whether you have a job opportunity, a project in mind, or just want to say hello, feel free to reach out. I'm always interested in discussing quality assurance, test automation, and web development."
                            </p>

                            <div class="space-y-3">
                                {CONTACT_LINKS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        view! {
                                            <Reveal
                                                in_view
                                                from=RevealFrom::Left
                                                delay_ms=stagger_ms(200, i, 100)
                                            >
                                                <ContactRow item />
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <Reveal in_view from=RevealFrom::Right delay_ms=300>
                            <MessageForm />
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(item: &'static ContactLink) -> impl IntoView {
    let body = move || {
        view! {
            <div class="p-2.5 glass-subtle rounded-xl group-hover:glow-green transition-all">
                <i class=format!("{} text-lg text-primary dark:text-primary-dark", item.icon) />
            </div>
            <div>
                <p class="text-xs text-gray-500 dark:text-gray-400">{item.label}</p>
                <p class="text-sm font-medium text-gray-900 dark:text-white">{item.value}</p>
            </div>
        }
    };

    match item.link {
        Some(link) => {
            let external = link.is_external();
            view! {
                <a
                    href=link.href()
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="flex items-center gap-4 p-3 rounded-xl hover:bg-white/30 dark:hover:bg-white/5 transition-all group"
                >
                    {body()}
                </a>
            }
            .into_any()
        }
        None => view! { <div class="flex items-center gap-4 p-3 rounded-xl">{body()}</div> }
            .into_any(),
    }
}

/// Hands the message to the visitor's mail client; nothing is sent from
/// the site itself.
#[component]
fn MessageForm() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let link = form.get_untracked().mailto_link();
        if let Err(e) = window().location().set_href(&link) {
            log::error!("couldn't open mail client: {e:?}");
        }
        set_form.set(ContactForm::default());
        set_submitted.set(true);
        set_timeout(move || set_submitted.set(false), SUBMITTED_NOTICE);
    };

    view! {
        <form on:submit=on_submit class="glass rounded-2xl p-6 glow-green">
            <div class="space-y-4">
                <div>
                    <label for="name" class=LABEL_CLASS>
                        "Name"
                    </label>
                    <input
                        type="text"
                        id="name"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                        class=INPUT_CLASS
                        placeholder="Your name"
                    />
                </div>
                <div>
                    <label for="email" class=LABEL_CLASS>
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                        class=INPUT_CLASS
                        placeholder="your@email.com"
                    />
                </div>
                <div>
                    <label for="message" class=LABEL_CLASS>
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        required
                        rows=4
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| set_form.update(|f| f.message = event_target_value(&ev))
                        class=format!("{INPUT_CLASS} resize-none")
                        placeholder="Your message..."
                    />
                </div>
                <button
                    type="submit"
                    class="w-full py-3 bg-gradient-to-r from-primary to-emerald-500 dark:from-primary-dark dark:to-emerald-400 text-white dark:text-dark-bg rounded-xl font-semibold hover:shadow-xl hover:shadow-green-500/20 transition-all hover:-translate-y-0.5"
                >
                    {move || if submitted.get() { "Opening Email Client..." } else { "Send Message" }}
                </button>
            </div>
        </form>
    }
}
