pub mod browser;
pub mod components;
pub mod error;
pub mod gate;
pub mod logging;

pub use error::GateError;
pub use gate::{AuthGate, AuthProbe, DocumentHandle, Navigator};

use authgate_shared::config::DEFAULT_LOG_LEVEL;
use authgate_shared::GateConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        logging::init(DEFAULT_LOG_LEVEL);
        return;
    };

    let loaded = browser::read_config(&document);
    let level = match &loaded {
        Ok(config) => config.log_level.as_str(),
        Err(_) => DEFAULT_LOG_LEVEL,
    };

    // Initialize tracing
    logging::init(level);

    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring invalid page configuration");
        GateConfig::default()
    });
    browser::remember_config(config);
}

/// Entry point for protected pages: shows the navigation bar or redirects to
/// the login page.
#[wasm_bindgen(js_name = checkAuthAndShowNav)]
pub async fn check_auth_and_show_nav() {
    match browser::browser_gate() {
        Ok(gate) => gate.check_auth_and_show_nav().await,
        Err(err) => tracing::error!(error = %err, "Auth gate unavailable"),
    }
}

/// Entry point for the splash page: forwards visitors who are already
/// signed in.
#[wasm_bindgen(js_name = routeLanding)]
pub async fn route_landing() {
    match browser::browser_gate() {
        Ok(gate) => gate.route_landing().await,
        Err(err) => tracing::error!(error = %err, "Auth gate unavailable"),
    }
}
