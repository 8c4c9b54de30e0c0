//! Boot sequence and page-level mounting

use std::sync::atomic::{AtomicBool, Ordering};

use gloo_events::EventListener;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::{Bindings, dom, mount_date_range, mount_password_toggles};
use crate::config::{self, UiConfig};
use crate::logging;

static BOOTED: AtomicBool = AtomicBool::new(false);

/// Everything one call to [`mount_all`] attached
#[derive(Debug, Default)]
#[must_use = "dropping Mounted detaches its listeners"]
pub struct Mounted {
    pub password: Bindings,
    pub date_range: Bindings,
}

impl Mounted {
    /// Keeps all listeners for the page's lifetime
    pub fn forget(self) {
        self.password.forget();
        self.date_range.forget();
    }
}

/// Mounts both enhancements independently
///
/// A failure in one is logged and never prevents the other from mounting.
pub fn mount_all(document: &Document, config: &UiConfig) -> Mounted {
    let password = mount_password_toggles(document, &config.password).unwrap_or_else(|err| {
        warn!(%err, "password toggles not mounted");
        Bindings::new()
    });
    let date_range = mount_date_range(document, &config.date_range);

    info!(
        password_toggles = password.len(),
        date_range_listeners = date_range.len(),
        "form enhancements mounted"
    );

    Mounted {
        password,
        date_range,
    }
}

/// Runs `setup` once the document has been parsed
///
/// WASM modules usually finish loading after `DOMContentLoaded` has fired,
/// so a document that is already interactive runs `setup` immediately.
pub fn when_ready(document: &Document, setup: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        EventListener::once(document, "DOMContentLoaded", move |_event| setup()).forget();
    } else {
        setup();
    }
}

/// Sets `flag` and reports whether this call was the one that set it
#[must_use]
pub fn claim_first_boot(flag: &AtomicBool) -> bool {
    !flag.swap(true, Ordering::SeqCst)
}

/// JS entry point: configure, log, then enhance the page when it is ready
///
/// Only the first call does anything. Both the Trunk binary and a JS loader
/// may call it, and mounting twice would attach two click handlers per
/// toggle button.
///
/// # Errors
///
/// Returns a JS `Error` if there is no window or document
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    if !claim_first_boot(&BOOTED) {
        return Ok(());
    }

    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let loaded = config::load(&document);
    let config = loaded.clone().unwrap_or_default();

    logging::init(config.level().unwrap_or(LevelFilter::INFO));
    if let Err(err) = loaded {
        warn!(%err, "ignoring page config, using defaults");
    }

    let ready = document.clone();
    when_ready(&document, move || mount_all(&ready, &config).forget());

    Ok(())
}
