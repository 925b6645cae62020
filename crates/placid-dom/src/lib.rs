//! Placid Page Runtime
//!
//! WebAssembly runtime that enhances the static Placid pages: the theme
//! toggle, the mobile navigation toggle, the category search filter and the
//! contact form validator. Each component looks up its elements once the
//! document is ready and silently stays inert when they are missing.
//!
//! Setup is idempotent: every wired control is marked, and running setup
//! again skips it.
//!
//! With the `autostart` feature the runtime wires itself up with the default
//! hooks as soon as the module is instantiated. Without it, call `start` or
//! `startWithConfig` after `init`.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! // built with `wasm-pack build crates/placid-dom --target web`
//! import init, { startWithConfig } from './placid_dom.js';
//!
//! await init();
//! startWithConfig({ theme: { storage_key: 'my-site-theme' } });
//! ```

pub mod contact;
pub mod error;
pub mod navigation;
pub mod page;
pub mod search;
pub mod storage;
pub mod theme;

pub use error::{DomError, Result};
use placid_core::HookConfig;
pub use storage::BrowserStorage;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, Event};

use crate::page::{query, query_all};

/// Initialize the WASM module and wire up the page with default hooks.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn init() {
    install_hooks();
    if let Err(err) = start_with(HookConfig::default()) {
        log::error!("placid startup failed: {err}");
    }
}

/// Wire up the page with the default hooks.
#[wasm_bindgen(js_name = start)]
pub fn start() -> std::result::Result<(), JsValue> {
    install_hooks();
    start_with(HookConfig::default()).map_err(Into::into)
}

/// Wire up the page with a hook configuration object.
///
/// Omitted fields keep their defaults; `undefined` or `null` means all
/// defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: JsValue) -> std::result::Result<(), JsValue> {
    install_hooks();
    let config = if config.is_undefined() || config.is_null() {
        HookConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?
    };
    start_with(config).map_err(Into::into)
}

/// Get the version of the runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Run [`enhance`] once the document structure is ready.
pub fn start_with(config: HookConfig) -> Result<()> {
    config.validate()?;
    let document = page::document()?;

    if document.ready_state() != "loading" {
        enhance(&document, &config);
        return Ok(());
    }

    let ready_document = document.clone();
    let on_ready = Closure::once_into_js(move |_: Event| {
        enhance(&ready_document, &config);
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

/// Attach all four components to `document`.
///
/// Components are independent: one failing to set up does not stop the rest.
pub fn enhance(document: &Document, config: &HookConfig) {
    let theme = theme::setup_theme_toggle(
        query(document, &config.theme.toggle),
        document.body(),
        &config.theme,
        BrowserStorage::new(),
    );

    let navigation = navigation::setup_navigation_toggle(
        query(document, &config.navigation.menu_toggle),
        query(document, &config.navigation.panel),
    );

    let search_forms = search::suppress_search_forms(query_all(document, &config.search.form));

    let category_filter = search::setup_category_filter(
        query(document, &config.search.filter_group),
        query(document, &config.search.input),
        query(document, &config.search.feedback),
        &config.search,
    );

    let contact = contact::setup_contact_form(query(document, &config.contact.form), &config.contact);

    for (component, result) in [
        ("theme toggle", theme),
        ("navigation toggle", navigation),
        ("search forms", search_forms),
        ("category filter", category_filter),
        ("contact form", contact),
    ] {
        if let Err(err) = result {
            log::warn!("{component} setup failed: {err}");
        }
    }
}

fn install_hooks() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A logger may already be installed by the host page.
    let _ = console_log::init_with_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
