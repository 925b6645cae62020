//! DOM lookup and event helpers shared by the page components.

use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList,
};

use crate::error::{DomError, Result};

/// The current document.
pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Something selectors can be run against.
pub trait Scope {
    fn select(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue>;
}

impl Scope for Document {
    fn select(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn select(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First element matching `selector`. An invalid selector is logged and
/// treated as no match.
pub fn query(scope: &impl Scope, selector: &str) -> Option<Element> {
    match scope.select(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector `{selector}`: {}", DomError::from(err));
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(scope: &impl Scope, selector: &str) -> Vec<Element> {
    let list = match scope.select_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector `{selector}`: {}", DomError::from(err));
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners are never removed; leak the closure to keep it alive.
    closure.forget();
    Ok(())
}

/// Mark `element` as wired for `component`.
///
/// Returns `false` if it already was, so running setup again never stacks a
/// second listener on the same control.
pub fn claim(element: &Element, component: &str) -> Result<bool> {
    let marker = format!("data-placid-{component}");
    if element.has_attribute(&marker) {
        return Ok(false);
    }
    element.set_attribute(&marker, "")?;
    Ok(true)
}

/// Current value of a form control (`input`, `textarea` or `select`).
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

/// Log a handler failure. Handlers never propagate errors to the page.
pub(crate) fn report(component: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{component} handler failed: {err}");
    }
}
