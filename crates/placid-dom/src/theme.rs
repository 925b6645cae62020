//! Theme toggle wiring.

use placid_core::{KeyValueStore, Theme, ThemeController, config::ThemeHooks};
use web_sys::{Element, HtmlElement};

use crate::{
    error::{DomError, Result},
    page::{claim, document, listen, query, report},
};

/// Apply the stored theme and make `toggle` flip it.
///
/// No-op when the toggle or the body is missing, or when the toggle is
/// already wired.
pub fn setup_theme_toggle<S>(
    toggle: Option<Element>,
    body: Option<HtmlElement>,
    hooks: &ThemeHooks,
    store: S,
) -> Result<()>
where
    S: KeyValueStore + 'static,
{
    let (Some(toggle), Some(body)) = (toggle, body) else {
        log::debug!("theme toggle not present, skipping");
        return Ok(());
    };
    if !claim(&toggle, "theme")? {
        log::debug!("theme toggle already wired");
        return Ok(());
    }

    let controller = ThemeController::with_key(store, hooks.storage_key.clone());
    if controller.initial().is_dark() {
        body.class_list().add_1(&hooks.dark_class)?;
    }
    sync_indicator(&toggle, &hooks.icon, current_theme(&body, &hooks.dark_class))?;

    let dark_class = hooks.dark_class.clone();
    let icon = hooks.icon.clone();
    let control = toggle.clone();
    listen(&toggle, "click", move |_| {
        let current = current_theme(&body, &dark_class);
        let next = controller.toggle(current);
        let result = body
            .class_list()
            .toggle_with_force(&dark_class, next.is_dark())
            .map_err(DomError::from)
            .and_then(|_| sync_indicator(&control, &icon, next));
        report("theme toggle", result);
    })
}

/// Theme currently applied to the page.
pub fn current_theme(body: &HtmlElement, dark_class: &str) -> Theme {
    Theme::from_dark_flag(body.class_list().contains(dark_class))
}

/// Update `aria-pressed` and the icon label to reflect `theme`.
pub fn sync_indicator(toggle: &Element, icon_selector: &str, theme: Theme) -> Result<()> {
    let indicator = theme.indicator();
    toggle.set_attribute("aria-pressed", indicator.pressed_attr())?;
    if let Some(icon) = query(toggle, icon_selector) {
        icon.set_text_content(Some(indicator.label));
    }
    Ok(())
}

/// Set or clear `dark_class` on the current document body.
pub fn apply_theme(dark_class: &str, theme: Theme) -> Result<()> {
    let body = document()?.body().ok_or(DomError::NoBody)?;
    body.class_list().toggle_with_force(dark_class, theme.is_dark())?;
    Ok(())
}
