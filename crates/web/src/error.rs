// =============================================================================
// Portfolio Web - DOM Error Types
// =============================================================================
// Everything that can go wrong when binding the engine to the page.
// None of these reach the user: callers log and skip the effect.
// =============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// DOM binding error types.
#[derive(Error, Debug, Clone)]
pub enum DomError {
    #[error("No window object available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("2D canvas context unavailable")]
    NoContext2d,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
