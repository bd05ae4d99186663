use serde::Deserialize;
use thiserror::Error;

use crate::nav::{NavBar, NavLink, NavStyle};

pub const AUTH_ENDPOINT: &str = "/auth";
pub const FALLBACK_URL: &str = "/ui/index.html";
pub const MAIN_PAGE_URL: &str = "/ui/main.html";
pub const SETTINGS_PAGE_URL: &str = "/ui/settings.html";
pub const NAV_SEPARATOR: &str = " | ";
pub const NAV_MARKER_ID: &str = "auth-gate-nav";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Name of the `<meta>` tag a page can use to override the defaults.
pub const CONFIG_META_NAME: &str = "auth-gate-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Endpoints, navigation targets and presentation used by the gate.
///
/// Every field has a default, so a page only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Endpoint probed with a GET; any 2xx means authenticated.
    pub auth_endpoint: String,
    /// Where unauthenticated visitors are sent.
    pub fallback_url: String,
    /// Where authenticated visitors on the splash page are sent.
    pub landing_url: String,
    pub nav_links: Vec<NavLink>,
    pub nav_separator: String,
    pub nav_marker_id: String,
    pub nav_style: NavStyle,
    pub log_level: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: AUTH_ENDPOINT.to_string(),
            fallback_url: FALLBACK_URL.to_string(),
            landing_url: MAIN_PAGE_URL.to_string(),
            nav_links: vec![
                NavLink::new("Main", MAIN_PAGE_URL),
                NavLink::new("Settings", SETTINGS_PAGE_URL),
            ],
            nav_separator: NAV_SEPARATOR.to_string(),
            nav_marker_id: NAV_MARKER_ID.to_string(),
            nav_style: NavStyle::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GateConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("auth_endpoint", &self.auth_endpoint),
            ("fallback_url", &self.fallback_url),
            ("landing_url", &self.landing_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }

        if self.nav_marker_id.is_empty() {
            return Err(ConfigError::invalid("nav_marker_id", "must not be empty"));
        }
        if self.nav_marker_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid(
                "nav_marker_id",
                "must not contain whitespace",
            ));
        }

        for (index, link) in self.nav_links.iter().enumerate() {
            if link.label.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("nav_links[{}].label", index),
                    "must not be empty",
                ));
            }
            if link.href.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("nav_links[{}].href", index),
                    "must not be empty",
                ));
            }
        }

        Ok(())
    }

    pub fn nav_bar(&self) -> NavBar {
        NavBar {
            marker_id: self.nav_marker_id.clone(),
            links: self.nav_links.clone(),
            separator: self.nav_separator.clone(),
            style: self.nav_style.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.auth_endpoint, "/auth");
        assert_eq!(config.fallback_url, "/ui/index.html");
        assert_eq!(config.landing_url, "/ui/main.html");
        assert!(config.validate().is_ok());

        let nav = config.nav_bar();
        assert_eq!(
            nav.links,
            vec![
                NavLink::new("Main", "/ui/main.html"),
                NavLink::new("Settings", "/ui/settings.html"),
            ]
        );
        assert_eq!(nav.marker_id, "auth-gate-nav");
        assert_eq!(nav.separator, " | ");
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = GateConfig::from_json("{}").expect("should parse empty object");
        assert_eq!(config, GateConfig::default());
    }

    #[test]
    fn test_overrides_merge_onto_defaults() {
        let config = GateConfig::from_json(
            r#"{"fallback_url": "/login", "nav_links": [{"label": "Home", "href": "/home"}]}"#,
        )
        .expect("should parse overrides");

        assert_eq!(config.fallback_url, "/login");
        assert_eq!(config.auth_endpoint, "/auth");
        assert_eq!(config.nav_links, vec![NavLink::new("Home", "/home")]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = GateConfig::from_json(r#"{"retry_count": 3}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_link_field_rejected() {
        let result = GateConfig::from_json(
            r#"{"nav_links": [{"label": "A", "href": "/a", "target": "_blank"}]}"#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            GateConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let err = GateConfig::from_json(r#"{"fallback_url": "  "}"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "fallback_url"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_marker_with_whitespace_rejected() {
        let err = GateConfig::from_json(r#"{"nav_marker_id": "auth nav"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "nav_marker_id"));
    }

    #[test]
    fn test_link_without_href_rejected() {
        let err = GateConfig::from_json(
            r#"{"nav_links": [{"label": "Main", "href": "/ui/main.html"}, {"label": "Broken", "href": ""}]}"#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid configuration for nav_links[1].href: must not be empty"
        );
    }
}
