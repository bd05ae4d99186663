use gloo_net::http::Request;

use crate::error::GateError;
use crate::gate::AuthProbe;

/// Probes the auth endpoint with the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchProbe;

impl AuthProbe for FetchProbe {
    async fn probe(&self, endpoint: &str) -> Result<u16, GateError> {
        let response = Request::get(endpoint)
            .send()
            .await
            .map_err(|e| GateError::Transport(e.to_string()))?;

        Ok(response.status())
    }
}
