#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
#[cfg(feature = "images")]
pub mod images;
pub mod motion;
#[cfg(feature = "ssr")]
pub mod prerender;
pub mod theme;

#[cfg(feature = "hydrate")]
fn init_browser() {
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Entry point for the page served by the live server.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    init_browser();
    leptos::mount::hydrate_body(App);
}

/// Entry point for the static `index.html`: swaps the pre-rendered markup
/// inside `#root` for a live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use crate::app::*;
    use wasm_bindgen::JsCast;

    init_browser();
    let Some(root) = leptos::prelude::document().get_element_by_id("root") else {
        log::error!("no #root element to mount into");
        return;
    };
    root.set_inner_html("");
    leptos::mount::mount_to(root.unchecked_into(), App).forget();
}
