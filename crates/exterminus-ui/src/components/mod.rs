//! DOM wiring for the form enhancements
//!
//! Each component looks up its elements, skips silently when they are
//! missing, and returns the listeners it attached as [`Bindings`].

pub mod bindings;
pub mod date_range;
pub mod dom;
pub mod password_toggle;

pub use bindings::Bindings;
pub use date_range::mount_date_range;
pub use password_toggle::mount_password_toggles;

#[cfg(all(test, target_arch = "wasm32"))]
mod password_toggle_test;
