//! Progressive enhancements for the ExTerminus time-off forms
//!
//! This crate compiles to WASM and enhances server-rendered pages with two
//! independent behaviors:
//!
//! - a password peek button that flips a bound input between masked and
//!   plain text, keeping `aria-pressed`, `aria-label` and its icon in step
//! - start/end date defaulting, where the end date follows the start date
//!   until the user edits it
//!
//! ## Module Structure
//! - `app`: `boot` entry point and page-level mounting
//! - `components`: DOM wiring for each enhancement
//! - `models`: pure state, testable without a browser
//! - `config`: defaults plus page-embedded JSON overrides
//! - `logging`: `tracing` output to the browser console
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use app::{Mounted, boot, mount_all};

#[cfg(test)]
mod tests;
