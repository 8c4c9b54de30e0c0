//! Pure state for the form enhancements
//!
//! Nothing in here touches the DOM, so everything is testable natively.

pub mod date_range;
pub mod visibility;

pub use date_range::DateRangeSync;
pub use visibility::Visibility;
