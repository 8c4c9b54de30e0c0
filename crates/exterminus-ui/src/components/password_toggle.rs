//! Password peek button
//!
//! Markup contract:
//!
//! ```html
//! <input type="password" id="password">
//! <button type="button" class="password-toggle" data-target="password"
//!         aria-pressed="false" aria-label="Show password">
//!   <span aria-hidden="true">👁️</span>
//! </button>
//! ```
//!
//! Each button only ever touches the input its `data-target` names, so any
//! number of pairs can live on one page.

use std::rc::Rc;

use gloo_events::EventListener;
use tracing::{debug, warn};
use web_sys::{Document, Element, HtmlInputElement};

use crate::components::{Bindings, dom};
use crate::config::PasswordToggleConfig;
use crate::error::{Result, UiError};
use crate::models::Visibility;

/// Attaches a click handler to every toggle button with a resolvable target
///
/// Buttons without a target attribute, or whose target id is not an
/// `<input>` in the document, are skipped. No matching buttons at all yields
/// empty bindings.
///
/// # Errors
///
/// Returns `UiError::InvalidSelector` if the browser rejects
/// `config.toggle_selector`, or `config.icon_selector` when there is at
/// least one button to check it against
///
/// # Example
///
/// ```no_run
/// use exterminus_ui::components::{dom, mount_password_toggles};
/// use exterminus_ui::config::PasswordToggleConfig;
///
/// let document = dom::document()?;
/// let bindings = mount_password_toggles(&document, &PasswordToggleConfig::default())?;
/// bindings.forget();
/// # Ok::<(), exterminus_ui::error::UiError>(())
/// ```
pub fn mount_password_toggles(
    document: &Document,
    config: &PasswordToggleConfig,
) -> Result<Bindings> {
    let buttons = dom::query_all(document, &config.toggle_selector)?;
    if buttons.is_empty() {
        debug!(selector = %config.toggle_selector, "no password toggles on page");
        return Ok(Bindings::new());
    }

    // Reject a bad icon selector at mount time
    if let Some(first) = buttons.first() {
        dom::query_within(first, &config.icon_selector)?;
    }

    let shared = Rc::new(config.clone());
    let mut bindings = Bindings::new();

    for button in buttons {
        let Some(input) = bound_input(document, &button, &config.target_attribute) else {
            debug!(
                attribute = %config.target_attribute,
                target_id = ?button.get_attribute(&config.target_attribute),
                "password toggle has no bound input, skipping"
            );
            continue;
        };
        bindings.push(attach(button, input, Rc::clone(&shared)));
    }

    Ok(bindings)
}

/// Flips `input` between masked and revealed and updates `button` to match
///
/// Returns the new state.
///
/// # Errors
///
/// Returns error if:
/// - Setting an aria attribute on the button throws
/// - The browser rejects `config.icon_selector`
pub fn toggle(
    button: &Element,
    input: &HtmlInputElement,
    config: &PasswordToggleConfig,
) -> Result<Visibility> {
    let next = Visibility::from_input_type(&input.type_()).toggled();

    input.set_type(next.input_type());

    button
        .set_attribute("aria-pressed", next.aria_pressed())
        .map_err(|e| UiError::dom("set aria-pressed", &e))?;
    button
        .set_attribute("aria-label", next.pick(&config.show_label, &config.hide_label))
        .map_err(|e| UiError::dom("set aria-label", &e))?;

    if let Some(icon) = dom::query_within(button, &config.icon_selector)? {
        icon.set_text_content(Some(next.pick(&config.show_icon, &config.hide_icon)));
    }

    Ok(next)
}

fn bound_input(document: &Document, button: &Element, attribute: &str) -> Option<HtmlInputElement> {
    button
        .get_attribute(attribute)
        .filter(|id| !id.is_empty())
        .and_then(|id| dom::input_by_id(document, &id))
}

fn attach(button: Element, input: HtmlInputElement, config: Rc<PasswordToggleConfig>) -> EventListener {
    let target = button.clone();
    EventListener::new(&target, "click", move |_event| {
        if let Err(err) = toggle(&button, &input, &config) {
            warn!(%err, "password toggle failed");
        }
    })
}
