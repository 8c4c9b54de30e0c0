//! Start/end date defaulting on the time-off request form
//!
//! The end date starts out equal to the start date and follows it while the
//! user picks a start. The first edit of the end field itself stops that for
//! good. Date order and format are the server's problem.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use tracing::debug;
use web_sys::Document;

use crate::components::{Bindings, dom};
use crate::config::DateRangeConfig;
use crate::models::DateRangeSync;

/// Seeds the end date and keeps it following the start date until touched
///
/// If either field is missing (or is not an `<input>`), nothing is attached
/// and the returned bindings are empty.
///
/// Programmatic writes to the end field never mark it touched; only user
/// `input` events do.
pub fn mount_date_range(document: &Document, config: &DateRangeConfig) -> Bindings {
    let (Some(start), Some(end)) = (
        dom::input_by_id(document, &config.start_id),
        dom::input_by_id(document, &config.end_id),
    ) else {
        debug!(
            start_id = %config.start_id,
            end_id = %config.end_id,
            "date range fields not on page"
        );
        return Bindings::new();
    };

    let sync = Rc::new(Cell::new(DateRangeSync::new()));
    let mut bindings = Bindings::new();

    let touched = Rc::clone(&sync);
    bindings.push(EventListener::new(&end, "input", move |_event| {
        let mut state = touched.get();
        state.on_end_input();
        touched.set(state);
    }));

    if let Some(value) = DateRangeSync::initial_end(&start.value(), &end.value()) {
        end.set_value(&value);
    }

    let source = start.clone();
    bindings.push(EventListener::new(&start, "input", move |_event| {
        if let Some(value) = sync.get().on_start_input(&source.value()) {
            end.set_value(&value);
        }
    }));

    bindings
}
