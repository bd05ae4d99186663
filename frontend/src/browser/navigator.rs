use web_sys::Location;

use crate::error::GateError;
use crate::gate::Navigator;

pub struct BrowserNavigator {
    location: Location,
}

impl BrowserNavigator {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) -> Result<(), GateError> {
        self.location.set_href(url).map_err(GateError::navigation)
    }
}
