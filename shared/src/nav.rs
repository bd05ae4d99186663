use serde::Deserialize;

/// A single link in the injected navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Inline presentation applied to the navigation element
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavStyle {
    pub display: String,
    pub margin_bottom: String,
    pub padding_bottom: String,
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            display: "block".to_string(),
            margin_bottom: "1rem".to_string(),
            padding_bottom: "1rem".to_string(),
        }
    }
}

impl NavStyle {
    /// Renders the style as a `style` attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "display: {}; margin-bottom: {}; padding-bottom: {};",
            self.display, self.margin_bottom, self.padding_bottom
        )
    }
}

/// Everything needed to build the navigation element shown after authentication.
///
/// The bar is rendered as a `<nav>` carrying `marker_id` as its id, with each
/// link as an anchor and `separator` as text between consecutive anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub marker_id: String,
    pub links: Vec<NavLink>,
    pub separator: String,
    pub style: NavStyle,
}
