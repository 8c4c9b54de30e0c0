//! Panic-free DOM lookups
//!
//! Absence is `None`, never an error. Only a broken host (no window or
//! document) or a selector the browser rejects produce `UiError`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::error::{Result, UiError};

/// Current document of the global window
///
/// # Errors
///
/// Returns an error if:
/// - No window object is available (not in browser context)
/// - No document object is available
pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(UiError::WindowNotAvailable)?
        .document()
        .ok_or(UiError::DocumentNotAvailable)
}

/// All elements matching `selector`, in document order
///
/// # Errors
///
/// Returns `UiError::InvalidSelector` if the browser cannot parse `selector`
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| UiError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{e:?}"),
        })?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First descendant of `root` matching `selector`
///
/// # Errors
///
/// Returns `UiError::InvalidSelector` if the browser cannot parse `selector`
pub fn query_within(root: &Element, selector: &str) -> Result<Option<Element>> {
    root.query_selector(selector)
        .map_err(|e| UiError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{e:?}"),
        })
}

/// `<input>` with the given id, if present
#[must_use]
pub fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}
