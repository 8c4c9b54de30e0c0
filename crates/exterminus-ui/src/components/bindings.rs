//! Owned event listeners

use gloo_events::EventListener;

/// Listeners attached by one mount.
///
/// Dropping the value detaches every listener it holds. [`Bindings::forget`]
/// leaks them instead so they live as long as the page.
#[derive(Debug, Default)]
#[must_use = "dropping Bindings detaches its listeners"]
pub struct Bindings {
    listeners: Vec<EventListener>,
}

impl Bindings {
    pub const fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn push(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Keeps every listener attached for the rest of the page's lifetime
    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
    }
}
