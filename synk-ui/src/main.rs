//! synk.ai Dashboard
//!
//! Build and serve with `trunk serve`, or `trunk build` and let the `synk`
//! host serve `dist/`.

use leptos::*;

use synk_ui::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }

    mount_to_body(|| view! { <App /> });
}
