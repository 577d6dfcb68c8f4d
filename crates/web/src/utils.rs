// =============================================================================
// Portfolio Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Class Utilities
// 3. Logging
// =============================================================================

use portfolio_motion::Viewport;
use web_sys::{Document, Element, Window};

use crate::error::DomError;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Get the current document.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Look up an element by id.
pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Current inner size of the window.
pub fn viewport(window: &Window) -> Result<Viewport, DomError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

/// Top edge of `element` relative to the document.
pub fn document_top(window: &Window, element: &Element) -> Result<f64, DomError> {
    Ok(element.get_bounding_client_rect().top() + window.scroll_y()?)
}

// -----------------------------------------------------------------------------
// 2. Class Utilities
// -----------------------------------------------------------------------------

/// Append `extra` to `base` when `on` holds.
pub fn class_when(base: &str, extra: &str, on: bool) -> String {
    if on && !extra.is_empty() {
        format!("{} {}", base, extra)
    } else {
        base.to_string()
    }
}

// -----------------------------------------------------------------------------
// 3. Logging
// -----------------------------------------------------------------------------

/// Console log level, picked at build time from `PORTFOLIO_LOG`.
pub fn log_level() -> log::Level {
    parse_level(option_env!("PORTFOLIO_LOG"))
}

fn parse_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Debug)
}
