//! Tests for the password peek button
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]
#![allow(clippy::expect_used)]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::dom;
use super::password_toggle::{mount_password_toggles, toggle};
use crate::config::PasswordToggleConfig;
use crate::error::UiError;
use crate::models::Visibility;

wasm_bindgen_test_configure!(run_in_browser);

struct Pair {
    button: HtmlElement,
    input: HtmlInputElement,
}

impl Pair {
    fn icon_text(&self) -> Option<String> {
        self.button
            .query_selector("[aria-hidden=\"true\"]")
            .expect("icon selector should parse")
            .and_then(|icon| icon.text_content())
    }
}

fn document() -> Document {
    dom::document().expect("should have document")
}

fn config_for(class: &str) -> PasswordToggleConfig {
    PasswordToggleConfig {
        toggle_selector: format!(".{class}"),
        ..PasswordToggleConfig::default()
    }
}

/// Appends an input and a toggle button bound to it, markup as rendered by the server
fn append_pair(document: &Document, class: &str, input_id: &str) -> Pair {
    let body = document.body().expect("should have body");

    let input = document
        .create_element("input")
        .expect("create input")
        .dyn_into::<HtmlInputElement>()
        .expect("input element");
    input.set_type("password");
    input.set_id(input_id);
    input.set_value("hunter2");

    let button = document
        .create_element("button")
        .expect("create button")
        .dyn_into::<HtmlElement>()
        .expect("button element");
    button.set_class_name(class);
    button.set_attribute("type", "button").expect("type");
    button.set_attribute("data-target", input_id).expect("data-target");
    button.set_attribute("aria-pressed", "false").expect("aria-pressed");
    button.set_attribute("aria-label", "Show password").expect("aria-label");

    let icon = document.create_element("span").expect("create icon");
    icon.set_attribute("aria-hidden", "true").expect("aria-hidden");
    icon.set_text_content(Some("👁️"));
    button.append_child(&icon).expect("append icon");

    body.append_child(&input).expect("append input");
    body.append_child(&button).expect("append button");

    Pair { button, input }
}

#[wasm_bindgen_test]
fn test_click_reveals_password() {
    let document = document();
    let pair = append_pair(&document, "peek-reveal", "pw-reveal");

    let bindings = mount_password_toggles(&document, &config_for("peek-reveal"))
        .expect("mount should succeed");
    assert_eq!(bindings.len(), 1);

    pair.button.click();

    assert_eq!(pair.input.type_(), "text");
    assert_eq!(pair.input.value(), "hunter2");
    assert_eq!(pair.button.get_attribute("aria-pressed"), Some("true".to_string()));
    assert_eq!(
        pair.button.get_attribute("aria-label"),
        Some("Hide password".to_string())
    );
    assert_eq!(pair.icon_text(), Some("🙈".to_string()));
}

#[wasm_bindgen_test]
fn test_second_click_restores_initial_state() {
    let document = document();
    let pair = append_pair(&document, "peek-twice", "pw-twice");

    let _bindings = mount_password_toggles(&document, &config_for("peek-twice"))
        .expect("mount should succeed");

    pair.button.click();
    pair.button.click();

    assert_eq!(pair.input.type_(), "password");
    assert_eq!(pair.button.get_attribute("aria-pressed"), Some("false".to_string()));
    assert_eq!(
        pair.button.get_attribute("aria-label"),
        Some("Show password".to_string())
    );
    assert_eq!(pair.icon_text(), Some("👁️".to_string()));
}

#[wasm_bindgen_test]
fn test_pairs_are_isolated() {
    let document = document();
    let first = append_pair(&document, "peek-pairs", "pw-pairs-1");
    let second = append_pair(&document, "peek-pairs", "pw-pairs-2");

    let bindings = mount_password_toggles(&document, &config_for("peek-pairs"))
        .expect("mount should succeed");
    assert_eq!(bindings.len(), 2);

    first.button.click();

    assert_eq!(first.input.type_(), "text");
    assert_eq!(second.input.type_(), "password");
    assert_eq!(second.button.get_attribute("aria-pressed"), Some("false".to_string()));
}

#[wasm_bindgen_test]
fn test_no_matching_buttons_is_not_an_error() {
    let document = document();

    let bindings = mount_password_toggles(&document, &config_for("peek-nothing-here"))
        .expect("mount should succeed");

    assert!(bindings.is_empty());
}

#[wasm_bindgen_test]
fn test_button_with_missing_target_is_skipped() {
    let document = document();
    let pair = append_pair(&document, "peek-orphan", "pw-orphan");
    pair.button
        .set_attribute("data-target", "pw-does-not-exist")
        .expect("data-target");

    let bindings = mount_password_toggles(&document, &config_for("peek-orphan"))
        .expect("mount should succeed");
    assert!(bindings.is_empty());

    pair.button.click();
    assert_eq!(pair.input.type_(), "password");
}

#[wasm_bindgen_test]
fn test_dropping_bindings_detaches_listener() {
    let document = document();
    let pair = append_pair(&document, "peek-drop", "pw-drop");

    let bindings = mount_password_toggles(&document, &config_for("peek-drop"))
        .expect("mount should succeed");
    drop(bindings);

    pair.button.click();
    assert_eq!(pair.input.type_(), "password");
}

#[wasm_bindgen_test]
fn test_toggle_uses_configured_labels() {
    let document = document();
    let pair = append_pair(&document, "peek-labels", "pw-labels");
    let config = PasswordToggleConfig {
        show_label: "Afficher".to_string(),
        hide_label: "Masquer".to_string(),
        ..config_for("peek-labels")
    };

    let state = toggle(&pair.button, &pair.input, &config).expect("toggle should succeed");
    assert_eq!(state, Visibility::Revealed);
    assert_eq!(pair.button.get_attribute("aria-label"), Some("Masquer".to_string()));

    let state = toggle(&pair.button, &pair.input, &config).expect("toggle should succeed");
    assert_eq!(state, Visibility::Masked);
    assert_eq!(pair.button.get_attribute("aria-label"), Some("Afficher".to_string()));
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_reported() {
    let document = document();
    let config = PasswordToggleConfig {
        toggle_selector: "..[".to_string(),
        ..PasswordToggleConfig::default()
    };

    let result = mount_password_toggles(&document, &config);
    assert!(matches!(result, Err(UiError::InvalidSelector { .. })));
}

#[wasm_bindgen_test]
fn test_invalid_icon_selector_fails_at_mount() {
    let document = document();
    let pair = append_pair(&document, "peek-bad-icon", "pw-bad-icon");
    let config = PasswordToggleConfig {
        icon_selector: "[aria-hidden=".to_string(),
        ..config_for("peek-bad-icon")
    };

    let result = mount_password_toggles(&document, &config);
    assert!(matches!(
        result,
        Err(UiError::InvalidSelector { ref selector, .. }) if selector == "[aria-hidden="
    ));

    pair.button.click();
    assert_eq!(pair.input.type_(), "password");
    assert_eq!(pair.button.get_attribute("aria-pressed"), Some("false".to_string()));
}
