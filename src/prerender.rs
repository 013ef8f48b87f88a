//! Static pre-rendering.
//!
//! Renders [`App`] to HTML on the server side and splices it into an
//! already built `index.html`, so crawlers and link previews see the page
//! content without running any WASM.

use std::{fs, path::PathBuf};

use leptos::{prelude::*, reactive::owner::Owner, tachys::view::RenderHtml};
use regex::Regex;
use thiserror::Error;

use crate::app::App;

/// `public/index.html` after cargo-leptos copies it into the site root.
pub const DEFAULT_TEMPLATE: &str = "target/site/index.html";
pub const ROOT_PLACEHOLDER: &str = r#"<div id="root"></div>"#;
pub const DEFAULT_CSS_PATTERN: &str = r#"href="(/(?:pkg|assets)/[^"]+\.css)""#;
const STYLESHEET_LINK: &str = r#"<link rel="stylesheet""#;

#[derive(Error, Debug)]
pub enum PrerenderError {
    #[error("couldn't read template {}: {source}", path.display())]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("couldn't write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template has no root placeholder")]
    MissingPlaceholder,
    #[error("invalid stylesheet pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("render failed: {0}")]
    Render(String),
    #[error("render host already closed")]
    Closed,
}

/// Whatever turns the app into markup. Owns resources that must be
/// released with [`RenderHost::close`] once rendering is over.
pub trait RenderHost {
    fn render(&mut self) -> Result<String, PrerenderError>;
    fn close(&mut self);
}

/// Renders [`App`] inside its own reactive owner. Browser-only hooks fall
/// back to their server versions, so nothing here touches a DOM.
pub struct LeptosHost {
    owner: Option<Owner>,
}

impl LeptosHost {
    pub fn new() -> Self {
        Self {
            owner: Some(Owner::new()),
        }
    }
}

impl Default for LeptosHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderHost for LeptosHost {
    fn render(&mut self) -> Result<String, PrerenderError> {
        let owner = self.owner.as_ref().ok_or(PrerenderError::Closed)?;
        let html = owner.with(|| view! { <App /> }.to_html());
        if html.is_empty() {
            return Err(PrerenderError::Render("app rendered no markup".to_string()));
        }
        Ok(html)
    }

    fn close(&mut self) {
        if let Some(owner) = self.owner.take() {
            owner.cleanup();
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrerenderConfig {
    /// Built page to patch in place.
    pub template: PathBuf,
    /// Regex whose first group captures the stylesheet href to preload.
    pub css_pattern: String,
}

impl Default for PrerenderConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            css_pattern: DEFAULT_CSS_PATTERN.to_string(),
        }
    }
}

/// Adds a preload hint for the stylesheet matched by `css_pattern` and
/// fills the root placeholder with `app_html`.
pub fn inject(template: &str, app_html: &str, css_pattern: &Regex) -> Result<String, PrerenderError> {
    if !template.contains(ROOT_PLACEHOLDER) {
        return Err(PrerenderError::MissingPlaceholder);
    }

    let mut page = template.to_string();
    if let Some(href) = css_pattern.captures(template).and_then(|c| c.get(1)) {
        let preload = format!(
            "<link rel=\"preload\" as=\"style\" href=\"{}\" />\n    {STYLESHEET_LINK}",
            href.as_str()
        );
        page = page.replacen(STYLESHEET_LINK, &preload, 1);
    }

    Ok(page.replacen(
        ROOT_PLACEHOLDER,
        &format!(r#"<div id="root">{app_html}</div>"#),
        1,
    ))
}

/// Renders with `host` and writes the result into the configured template.
/// `host` is closed on every path, including failures.
pub fn prerender<H: RenderHost>(host: &mut H, config: &PrerenderConfig) -> Result<(), PrerenderError> {
    let res = render_into(host, config);
    host.close();
    res
}

fn render_into<H: RenderHost>(host: &mut H, config: &PrerenderConfig) -> Result<(), PrerenderError> {
    let css_pattern = Regex::new(&config.css_pattern)?;
    let template =
        fs::read_to_string(&config.template).map_err(|source| PrerenderError::ReadTemplate {
            path: config.template.clone(),
            source,
        })?;

    let app_html = host.render()?;
    tracing::debug!(bytes = app_html.len(), "rendered app");

    let page = inject(&template, &app_html, &css_pattern)?;
    fs::write(&config.template, page).map_err(|source| PrerenderError::WriteOutput {
        path: config.template.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <link rel="stylesheet" href="/assets/index-3f9a1c.css">
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

    #[derive(Default)]
    struct SpyHost {
        fail: bool,
        renders: usize,
        closes: usize,
    }

    impl RenderHost for SpyHost {
        fn render(&mut self) -> Result<String, PrerenderError> {
            self.renders += 1;
            if self.fail {
                Err(PrerenderError::Render("boom".to_string()))
            } else {
                Ok("<main>hello</main>".to_string())
            }
        }

        fn close(&mut self) {
            self.closes += 1;
        }
    }

    fn write_template(dir: &tempfile::TempDir, content: &str) -> PrerenderConfig {
        let template = dir.path().join("index.html");
        fs::write(&template, content).expect("should be able to write template");
        PrerenderConfig {
            template,
            ..Default::default()
        }
    }

    #[test]
    fn test_inject_fills_root_and_preloads_css() {
        let re = Regex::new(DEFAULT_CSS_PATTERN).unwrap();
        let page = inject(TEMPLATE, "<p>content</p>", &re).unwrap();

        assert!(page.contains(r#"<div id="root"><p>content</p></div>"#));
        assert!(!page.contains(ROOT_PLACEHOLDER));

        let preload = page
            .find(r#"<link rel="preload" as="style" href="/assets/index-3f9a1c.css" />"#)
            .expect("preload tag should be inserted");
        let stylesheet = page.find(STYLESHEET_LINK).unwrap();
        assert!(preload < stylesheet);
    }

    #[test]
    fn test_inject_without_stylesheet() {
        let re = Regex::new(DEFAULT_CSS_PATTERN).unwrap();
        let template = r#"<body><div id="root"></div></body>"#;
        let page = inject(template, "x", &re).unwrap();
        assert_eq!(page, r#"<body><div id="root">x</div></body>"#);
    }

    #[test]
    fn test_inject_requires_placeholder() {
        let re = Regex::new(DEFAULT_CSS_PATTERN).unwrap();
        let res = inject("<body><div id=\"app\"></div></body>", "x", &re);
        assert!(matches!(res, Err(PrerenderError::MissingPlaceholder)));
    }

    #[test]
    fn test_prerender_writes_and_closes() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_template(&dir, TEMPLATE);
        let mut host = SpyHost::default();

        prerender(&mut host, &config).expect("prerender should succeed");

        assert_eq!(host.renders, 1);
        assert_eq!(host.closes, 1);
        let page = fs::read_to_string(&config.template).unwrap();
        assert!(page.contains(r#"<div id="root"><main>hello</main></div>"#));
    }

    #[test]
    fn test_prerender_closes_when_render_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_template(&dir, TEMPLATE);
        let mut host = SpyHost {
            fail: true,
            ..Default::default()
        };

        let res = prerender(&mut host, &config);

        assert!(matches!(res, Err(PrerenderError::Render(_))));
        assert_eq!(host.closes, 1);
        // template untouched
        assert_eq!(fs::read_to_string(&config.template).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_prerender_closes_when_template_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = PrerenderConfig {
            template: dir.path().join("missing.html"),
            ..Default::default()
        };
        let mut host = SpyHost::default();

        let res = prerender(&mut host, &config);

        assert!(matches!(res, Err(PrerenderError::ReadTemplate { .. })));
        assert_eq!(host.renders, 0);
        assert_eq!(host.closes, 1);
    }

    #[test]
    fn test_leptos_host_renders_page() {
        let mut host = LeptosHost::new();
        let html = host.render().expect("app should render");
        host.close();

        assert!(html.contains("Jegadeesan"));
        for id in crate::content::section_ids() {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
        assert!(html.contains(r#"href="mailto:susanthj14@gmail.com""#));

        let year = crate::content::copyright_year(crate::content::BUILD_TIME).unwrap();
        assert!(html.contains(&format!("© {year} Susanth Jegadeesan. All rights reserved.")));
        assert!(matches!(host.render(), Err(PrerenderError::Closed)));
    }

    #[test]
    fn test_prerenders_shipped_template() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_template(&dir, include_str!("../public/index.html"));
        let mut host = LeptosHost::new();

        prerender(&mut host, &config).expect("shipped template should prerender");

        let page = fs::read_to_string(&config.template).unwrap();
        assert!(page.contains(r#"<link rel="preload" as="style" href="/pkg/portfolio.css" />"#));
        assert!(!page.contains(ROOT_PLACEHOLDER));
        assert!(page.contains("Jegadeesan"));
        // boot script survives the splice
        assert!(page.contains("mount();"));
    }

    #[test]
    fn test_default_template_is_site_root_copy() {
        let config = PrerenderConfig::default();
        assert_eq!(config.template, PathBuf::from("target/site/index.html"));

        let manifest = include_str!("../Cargo.toml");
        assert!(manifest.contains(r#"site-root = "target/site""#));
        assert!(manifest.contains(r#"assets-dir = "public""#));
    }

    #[test]
    fn test_leptos_host_fills_template() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_template(&dir, TEMPLATE);
        let mut host = LeptosHost::new();

        prerender(&mut host, &config).expect("prerender should succeed");

        let page = fs::read_to_string(&config.template).unwrap();
        assert!(!page.contains(ROOT_PLACEHOLDER));
        assert!(page.contains(r#"<div id="root"><"#));
        assert!(page.contains("Get In Touch"));
    }
}
