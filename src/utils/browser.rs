//! Thin wrappers over browser navigation. No-ops on host targets so view
//! models and effects stay testable off-browser.

#[cfg(target_arch = "wasm32")]
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(_path: &str) {}
