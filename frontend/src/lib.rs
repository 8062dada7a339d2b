pub mod api;
mod components;
pub mod config;
pub mod models;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use wasm_bindgen_futures::spawn_local;

/// Installs the panic hook and the console logger, resolves the runtime
/// config, then mounts the router.
pub fn boot() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting Lexboard frontend");

    spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

