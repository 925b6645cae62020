//! Menu toggle wiring for the collapsible navigation panel.

use placid_core::{
    NavState,
    navigation::{ARIA_EXPANDED_ATTR, DATA_OPEN_ATTR},
};
use web_sys::Element;

use crate::{
    error::Result,
    page::{claim, listen, report},
};

/// Make `menu_toggle` open and close `panel`. No-op if either is missing.
pub fn setup_navigation_toggle(menu_toggle: Option<Element>, panel: Option<Element>) -> Result<()> {
    let (Some(menu_toggle), Some(panel)) = (menu_toggle, panel) else {
        log::debug!("menu toggle or navigation panel not present, skipping");
        return Ok(());
    };
    if !claim(&menu_toggle, "navigation")? {
        log::debug!("menu toggle already wired");
        return Ok(());
    }

    let control = menu_toggle.clone();
    listen(&menu_toggle, "click", move |_| {
        report("menu toggle", toggle_panel(&control, &panel));
    })
}

fn toggle_panel(menu_toggle: &Element, panel: &Element) -> Result<()> {
    let next = NavState::from_attr(panel.get_attribute(DATA_OPEN_ATTR).as_deref()).toggled();
    panel.set_attribute(DATA_OPEN_ATTR, next.as_attr())?;
    menu_toggle.set_attribute(ARIA_EXPANDED_ATTR, next.as_attr())?;
    Ok(())
}
