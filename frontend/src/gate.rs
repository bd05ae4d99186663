use authgate_shared::{AuthOutcome, GateConfig, NavBar, RejectReason};

use crate::error::GateError;

/// Asks the server whether the current client holds a valid session.
#[allow(async_fn_in_trait)]
pub trait AuthProbe {
    /// Issues a bodiless GET to `endpoint` and returns the response status.
    /// The response body is never read.
    async fn probe(&self, endpoint: &str) -> Result<u16, GateError>;
}

/// The part of the page the gate is allowed to touch.
pub trait DocumentHandle {
    fn has_element(&self, id: &str) -> bool;

    /// Inserts the navigation bar as the first child of the root container.
    fn prepend_nav(&self, nav: &NavBar) -> Result<(), GateError>;
}

pub trait Navigator {
    /// Replaces the current page with `url`.
    fn redirect(&self, url: &str) -> Result<(), GateError>;
}

/// Probes the auth endpoint and either reveals navigation or sends the
/// visitor to the login page.
pub struct AuthGate<P, D, N> {
    config: GateConfig,
    probe: P,
    document: D,
    navigator: N,
}

impl<P, D, N> AuthGate<P, D, N>
where
    P: AuthProbe,
    D: DocumentHandle,
    N: Navigator,
{
    pub fn new(config: GateConfig, probe: P, document: D, navigator: N) -> Self {
        Self {
            config,
            probe,
            document,
            navigator,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub async fn authenticate(&self) -> AuthOutcome {
        match self.probe.probe(&self.config.auth_endpoint).await {
            Ok(status) => AuthOutcome::from_status(status),
            Err(err) => AuthOutcome::transport(err),
        }
    }

    /// Shows the navigation bar to authenticated visitors and redirects
    /// everyone else to the fallback page. Never fails: every error ends in
    /// the fallback redirect.
    pub async fn check_auth_and_show_nav(&self) {
        match self.authenticate().await {
            AuthOutcome::Authenticated => {
                if let Err(err) = self.show_nav() {
                    tracing::error!(error = %err, "Error showing navigation");
                    self.fall_back();
                }
            }
            AuthOutcome::Unauthenticated(reason) => {
                if reason.is_transport() {
                    self.log_probe_failure(&reason);
                }
                self.fall_back();
            }
        }
    }

    /// Splash-page variant: forwards visitors who are already signed in to
    /// the landing page and leaves everyone else where they are.
    pub async fn route_landing(&self) {
        let outcome = self.authenticate().await;
        if outcome.is_authenticated() {
            self.go_to(&self.config.landing_url);
        } else if let AuthOutcome::Unauthenticated(reason) = &outcome {
            if reason.is_transport() {
                self.log_probe_failure(reason);
            }
        }
    }

    fn log_probe_failure(&self, reason: &RejectReason) {
        tracing::error!(
            endpoint = %self.config.auth_endpoint,
            reason = %reason,
            "Error checking auth"
        );
    }

    fn show_nav(&self) -> Result<(), GateError> {
        let nav = self.config.nav_bar();

        if self.document.has_element(&nav.marker_id) {
            tracing::debug!(marker = %nav.marker_id, "Navigation already present, skipping");
            return Ok(());
        }

        self.document.prepend_nav(&nav)?;
        tracing::debug!(links = nav.links.len(), "Navigation shown");
        Ok(())
    }

    fn fall_back(&self) {
        self.go_to(&self.config.fallback_url);
    }

    fn go_to(&self, url: &str) {
        if let Err(err) = self.navigator.redirect(url) {
            tracing::error!(url, error = %err, "Redirect failed");
        }
    }
}
