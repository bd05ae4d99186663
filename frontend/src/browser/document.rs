use authgate_shared::NavBar;
use web_sys::Document;

use crate::components::{NavBarLinks, NavBarProps};
use crate::error::GateError;
use crate::gate::DocumentHandle;

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentHandle for BrowserDocument {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn prepend_nav(&self, nav: &NavBar) -> Result<(), GateError> {
        let body = self.document.body().ok_or(GateError::MissingBody)?;

        let element = self.document.create_element("nav").map_err(GateError::dom)?;
        element.set_id(&nav.marker_id);
        element
            .set_attribute("style", &nav.style.to_css())
            .map_err(GateError::dom)?;

        body.prepend_with_node_1(&element).map_err(GateError::dom)?;

        // Mount after insertion so the links land inside the prepended node
        yew::Renderer::<NavBarLinks>::with_root_and_props(
            element,
            NavBarProps {
                links: nav.links.clone(),
                separator: nav.separator.clone(),
            },
        )
        .render();

        Ok(())
    }
}
