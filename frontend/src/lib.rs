use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Mounts the Placid app when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Ignore the error if a logger is already installed.
    let _ = console_log::init_with_level(level);
    log::info!("mounting placid");

    leptos::mount::mount_to_body(App);
}
