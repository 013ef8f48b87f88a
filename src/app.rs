mod about;
mod certifications;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod navbar;
mod reveal;
mod skills;

use leptos::{html, prelude::*};
use leptos_meta::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::content::PROFILE;
use crate::theme::Theme;

use about::About;
use certifications::Certifications;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use skills::Skills;

pub const DEVICON_CSS: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";
const DESCRIPTION: &str = "QA Test Engineer with expertise in Playwright automation and a strong background in React.js development.";

/// `<meta property=..>` tags for link previews. `property` is not an
/// attribute the view macro knows, so these are built by hand.
fn open_graph(title: String, image: String) -> impl IntoView {
    [
        ("og:type", "website".to_string()),
        ("og:title", title),
        ("og:description", DESCRIPTION.to_string()),
        ("og:image", image),
        ("og:image:width", "1200".to_string()),
        ("og:image:height", "630".to_string()),
    ]
    .into_iter()
    .map(|(property, content)| html::meta().attr("property", property).attr("content", content))
    .collect_view()
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let title = format!("{} | {}", PROFILE.full_name(), PROFILE.headline());
    let og_image = format!("https://{}/og-image.png", PROFILE.domain);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=DESCRIPTION />
                {open_graph(title.clone(), og_image.clone())}
                <meta name="twitter:card" content="summary_large_image" />
                <meta name="twitter:title" content=title />
                <meta name="twitter:image" content=og_image />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" href=DEVICON_CSS />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(crate::theme::STORAGE_KEY);
        let prefers_dark = use_preferred_dark();

        Effect::watch(
            || (),
            move |_, _, _| {
                let resolved = Theme::resolve(stored.get_untracked(), prefers_dark.get_untracked());
                log::debug!("resolved theme {resolved:?}");
                set_theme.set(resolved);
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |theme, _, _| set_stored.set(Some(*theme)),
            false,
        );
    }

    let toggle_theme = Callback::new(move |_: ()| set_theme.update(|t| *t = t.toggled()));

    view! {
        <Title text=format!("{} | {}", PROFILE.full_name(), PROFILE.headline()) />
        <Html {..} class=move || theme.get().root_class() />

        <div class="min-h-screen bg-gradient-to-br from-gray-50 via-green-50/30 to-emerald-50/20 dark:from-dark-bg dark:via-dark-bg dark:to-dark-bg text-gray-900 dark:text-gray-100 transition-colors duration-300 relative overflow-x-hidden">
            // floating blobs behind the glass panels
            <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none">
                <div class="blob blob-1 -top-48 -left-48" />
                <div class="blob blob-2 top-1/3 -right-32" />
                <div class="blob blob-3 bottom-1/4 left-1/4" />
                <div class="blob blob-1 -bottom-32 right-1/3" />
            </div>

            <Navbar theme on_toggle=toggle_theme />
            <main>
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Education />
                <Certifications />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

/// Gradient heading shared by every section, e.g. "About" + "Me".
#[component]
fn SectionHeading(
    #[prop(optional)] lead: &'static str,
    accent: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold text-center mb-2">
            {(!lead.is_empty()).then(|| format!("{lead} "))}
            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-emerald-400 dark:from-primary-dark dark:to-accent">
                {accent}
            </span>
        </h2>
        <p class="text-gray-500 dark:text-gray-400 text-center mb-12">{subtitle}</p>
    }
}

/// Smoothly scrolls the element with the given id into view.
#[cfg(feature = "hydrate")]
fn scroll_to(section_id: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    if let Some(el) = document().get_element_by_id(section_id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    } else {
        log::warn!("no section with id {section_id}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn scroll_to(_section_id: &str) {}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::{reactive::owner::Owner, tachys::view::RenderHtml};

    fn render_shell() -> String {
        let owner = Owner::new();
        let html = owner.with(|| {
            let options = LeptosOptions::builder().output_name("portfolio").build();
            shell(options).to_html()
        });
        owner.cleanup();
        html
    }

    #[test]
    fn test_shell_has_link_preview_tags() {
        let html = render_shell();

        assert!(html.contains(
            r#"<meta property="og:image" content="https://susanthj.in/og-image.png">"#
        ));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200">"#));
        assert!(html.contains(
            r#"property="og:title" content="Susanth Jegadeesan | QA Test Engineer &amp; Front-End Developer""#
        ));
        assert!(html.contains(r#"name="twitter:card" content="summary_large_image""#));
    }

    #[test]
    fn test_shell_wraps_app() {
        let html = render_shell();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"href="/pkg/portfolio.css""#));
        assert!(html.contains(r#"id="contact""#));
    }
}
