//! Browser-backed implementations of the gate's capabilities.

mod config;
mod document;
mod navigator;
mod probe;

pub use config::{load_config, page_config, read_config, remember_config};
pub use document::BrowserDocument;
pub use navigator::BrowserNavigator;
pub use probe::FetchProbe;

use crate::error::GateError;
use crate::gate::AuthGate;

pub type BrowserGate = AuthGate<FetchProbe, BrowserDocument, BrowserNavigator>;

/// Wires a gate to the current window, using the page's configuration.
pub fn browser_gate() -> Result<BrowserGate, GateError> {
    let window =
        web_sys::window().ok_or_else(|| GateError::Dom("no window available".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| GateError::Dom("no document available".to_string()))?;

    let config = page_config(&document);

    Ok(AuthGate::new(
        config,
        FetchProbe,
        BrowserDocument::new(document),
        BrowserNavigator::new(window.location()),
    ))
}
