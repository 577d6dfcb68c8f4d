// =============================================================================
// Portfolio Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use portfolio_web::{utils, App};

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logger (ignore if already initialized by `mount`)
    let _ = console_log::init_with_level(utils::log_level());

    log::info!("Starting portfolio...");

    leptos::mount::mount_to_body(App);
}
