//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM and mounts the App component onto the body.

use leptos::prelude::*;
use scholarlink_ui::App;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
