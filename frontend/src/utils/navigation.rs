/// Full-page navigation; a no-op off the browser.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().pathname().ok().as_deref() == Some(path) {
                return;
            }
            if let Err(err) = window.location().set_href(path) {
                log::warn!("navigation to {} failed: {:?}", path, err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("redirect to {} skipped outside the browser", path);
    }
}
