//! Behavioral tests for the form enhancements
//!
//! BDD-style tests using given-when-then naming. They drive the pure models
//! and configuration; DOM wiring is covered by the wasm tests next to the
//! components.
