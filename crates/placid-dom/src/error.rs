//! Error types for the browser runtime.

use placid_core::CoreError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type alias using `DomError`.
pub type Result<T> = std::result::Result<T, DomError>;

/// Errors raised while wiring or running page handlers.
#[derive(Error, Debug)]
pub enum DomError {
    /// No global `window` (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no `<body>`.
    #[error("document has no body")]
    NoBody,

    /// A DOM call threw.
    #[error("DOM exception: {0}")]
    Js(String),

    /// Core configuration or storage error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort readable text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}
