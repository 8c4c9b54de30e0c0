//! WASM entry point for Trunk builds
//!
//! Bundlers that load the `cdylib` call `boot()` from JS instead.

fn main() {
    if let Err(err) = exterminus_ui::boot() {
        web_sys::console::error_1(&err);
    }
}
