//! Small helpers shared across pages: mount-lifetime cancellation,
//! simulated latency, and console logging that also works in native tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Cancellation token tied to a page's mount lifetime.
///
/// Every async operation a page spawns clones the guard and checks
/// [`MountGuard::is_live`] after each await before writing to page state.
/// Completions that land after the page unmounted are discarded instead of
/// updating disposed signals.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// Creates a live guard that is not registered with any owner.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Creates a guard cancelled automatically when the current reactive
    /// owner is cleaned up, i.e. when the mounting component is removed.
    pub fn mounted() -> Self {
        let guard = Self::new();
        let cleanup = guard.clone();
        on_cleanup(move || cleanup.cancel());
        guard
    }

    /// Marks the guard as cancelled.
    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Whether the owning page is still mounted.
    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits `ms` milliseconds in the browser; resolves immediately in native
/// builds so host-side tests stay fast and deterministic.
pub async fn simulated_delay(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}

/// Logs an informational message to the browser console (stdout natively).
pub fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));

    #[cfg(not(target_arch = "wasm32"))]
    println!("{msg}");
}

/// Logs an error message to the browser console (stderr natively).
pub fn console_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}
