use authgate_shared::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Document has no body element")]
    MissingBody,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GateError {
    pub fn dom(value: JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }

    pub fn navigation(value: JsValue) -> Self {
        Self::Navigation(format!("{:?}", value))
    }
}
