//! Theme toggle component.

use leptos::prelude::*;
use placid_core::{THEME_STORAGE_KEY, ThemeController, theme::DARK_CLASS};
use placid_dom::{BrowserStorage, theme::apply_theme};

/// Button switching between the light and dark theme.
///
/// Reads the stored preference on creation, keeps the `dark-mode` body class
/// in sync and persists every change to `localStorage`.
#[component]
pub fn ThemeToggle(
    /// Local storage key for the preference.
    #[prop(default = THEME_STORAGE_KEY.to_string(), into)]
    storage_key: String,
) -> impl IntoView {
    let controller = ThemeController::with_key(BrowserStorage::new(), storage_key);
    let theme = RwSignal::new(controller.initial());

    Effect::new(move |_| {
        if let Err(err) = apply_theme(DARK_CLASS, theme.get()) {
            log::warn!("failed to apply theme: {err}");
        }
    });

    let on_click = move |_| {
        let next = controller.toggle(theme.get_untracked());
        theme.set(next);
    };

    view! {
      <button
        id="theme-toggle"
        type="button"
        class="theme-toggle"
        aria-label="Toggle color theme"
        aria-pressed=move || theme.get().indicator().pressed_attr()
        on:click=on_click
      >
        <span class="theme-toggle__icon">{move || theme.get().indicator().label}</span>
      </button>
    }
}
