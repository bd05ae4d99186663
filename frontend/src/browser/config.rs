use std::cell::OnceCell;

use authgate_shared::config::CONFIG_META_NAME;
use authgate_shared::GateConfig;
use web_sys::Document;

use crate::error::GateError;

thread_local! {
    static PAGE_CONFIG: OnceCell<GateConfig> = const { OnceCell::new() };
}

/// Reads `<meta name="auth-gate-config" content="{...}">` from the page.
/// A page without the tag gets the defaults.
pub fn read_config(document: &Document) -> Result<GateConfig, GateError> {
    let selector = format!(r#"meta[name="{}"]"#, CONFIG_META_NAME);
    let meta = document.query_selector(&selector).map_err(GateError::dom)?;

    match meta.and_then(|meta| meta.get_attribute("content")) {
        Some(raw) => Ok(GateConfig::from_json(&raw)?),
        None => Ok(GateConfig::default()),
    }
}

pub fn load_config(document: &Document) -> GateConfig {
    read_config(document).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring invalid page configuration");
        GateConfig::default()
    })
}

/// Stores the configuration used for the rest of the page's lifetime.
/// Only the first call has an effect.
pub fn remember_config(config: GateConfig) {
    PAGE_CONFIG.with(|cell| {
        let _ = cell.set(config);
    });
}

/// The page's configuration, loaded on first use if `remember_config` was
/// never called.
pub fn page_config(document: &Document) -> GateConfig {
    PAGE_CONFIG.with(|cell| cell.get_or_init(|| load_config(document)).clone())
}
